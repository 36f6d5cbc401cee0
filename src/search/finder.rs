// file: src/search/finder.rs
// description: recursive folder search resolving matches to published documents
// reference: https://docs.rs/walkdir

use crate::config::SearchConfig;
use crate::error::{CmsError, Result};
use crate::models::{Publishable, Resolver, Storable};
use crate::search::ContentMatcher;
use crate::utils::Validator;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Full-text lookup over a collection's folder.
///
/// Walks the folder, matches raw file content against the query as a
/// case-insensitive literal, resolves each matching file name (minus
/// extension) through the collection, and keeps only published
/// documents. Files whose id resolves to nothing and documents that
/// are not published are dropped silently; I/O and traversal failures
/// abort the whole search.
pub struct FileFinder {
    config: SearchConfig,
}

impl FileFinder {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn find<C>(&self, collection: &C, query: &str) -> Result<Vec<C::Doc>>
    where
        C: Storable + Resolver,
        C::Doc: Publishable,
    {
        if query.trim().is_empty() {
            debug!("Empty search query matches nothing");
            return Ok(Vec::new());
        }

        let folder = collection.folder_path();
        Validator::validate_directory(folder)?;

        let matcher = ContentMatcher::literal(query)?;
        let mut results = Vec::new();

        for entry in WalkDir::new(folder)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            if self.should_skip(path) {
                debug!("Skipping file: {}", path.display());
                continue;
            }

            let metadata = entry.metadata()?;
            let max_size = (self.config.max_file_size_mb * 1024 * 1024) as u64;
            if metadata.len() > max_size {
                debug!(
                    "Skipping large file ({} MB): {}",
                    metadata.len() / 1024 / 1024,
                    path.display()
                );
                continue;
            }

            if !self.file_matches(path, &matcher)? {
                continue;
            }

            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                debug!("Cannot derive an id from {}", path.display());
                continue;
            };

            // A stem the resolver rejects outright (whitespace, dots)
            // is just another unresolvable match, not a failed search.
            match collection.resolve(id) {
                Ok(Some(doc)) if doc.is_published() => results.push(doc),
                Ok(Some(_)) => debug!("Dropping unpublished match: {}", id),
                Ok(None) => debug!("Match {} resolves to no document", id),
                Err(CmsError::Validation(reason)) => {
                    debug!("Dropping match {:?}: {}", id, reason);
                }
                Err(e) => return Err(e),
            }
        }

        info!("Search for {:?} matched {} documents", query, results.len());
        Ok(results)
    }

    /// Byte content is matched lossily, so stray binary files in a
    /// content folder do not abort the scan. A failed read still does.
    fn file_matches(&self, path: &Path, matcher: &ContentMatcher) -> Result<bool> {
        let bytes = fs::read(path).map_err(|source| CmsError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(matcher.is_match(&String::from_utf8_lossy(&bytes)))
    }

    fn should_skip(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.config.skip_patterns {
            if let Some(suffix) = pattern.strip_prefix('*') {
                // "*.tmp" style: the path must end with the suffix, so
                // names merely containing it (guide.tmpl.md) stay in.
                if path_str.ends_with(suffix) {
                    return true;
                }
            } else if let Some(prefix) = pattern.strip_suffix('*') {
                // ".git/*" style: anything under that directory.
                if path_str.contains(prefix) {
                    return true;
                }
            } else if path_str.contains(pattern.as_str()) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContentConfig, SearchConfig};
    use crate::models::{Collection, Entry};
    use std::fs;
    use tempfile::TempDir;

    fn search_config() -> SearchConfig {
        SearchConfig {
            skip_patterns: vec![],
            max_file_size_mb: 10,
        }
    }

    fn articles(root: &Path) -> Collection {
        Collection::articles(&ContentConfig {
            root_path: root.to_path_buf(),
            extension: "md".to_string(),
        })
    }

    fn write_article(collection: &Collection, id: &str, body: &str, published: bool) {
        let mut entry = collection.create(id).unwrap();
        entry
            .set("is_published", if published { "true" } else { "false" })
            .set_body(body)
            .save()
            .unwrap();
    }

    fn ids(results: &[Entry]) -> Vec<&str> {
        results.iter().map(|e| e.filename()).collect()
    }

    #[test]
    fn test_published_matches_only() {
        let temp = TempDir::new().unwrap();
        let collection = articles(temp.path());
        write_article(&collection, "a", "Hello world", true);
        write_article(&collection, "b", "hello there", false);
        write_article(&collection, "c", "goodbye", true);

        let finder = FileFinder::new(search_config());
        let results = finder.find(&collection, "hello").unwrap();

        assert_eq!(ids(&results), vec!["a"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let temp = TempDir::new().unwrap();
        let collection = articles(temp.path());
        write_article(&collection, "a", "Hello world", true);

        let finder = FileFinder::new(search_config());
        assert!(finder.find(&collection, "absent").unwrap().is_empty());
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let temp = TempDir::new().unwrap();
        let collection = articles(temp.path());
        write_article(&collection, "a", "Hello world", true);

        let finder = FileFinder::new(search_config());
        assert!(finder.find(&collection, "").unwrap().is_empty());
        assert!(finder.find(&collection, "   ").unwrap().is_empty());
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let temp = TempDir::new().unwrap();
        let collection = articles(&temp.path().join("nope"));

        let finder = FileFinder::new(search_config());
        assert!(finder.find(&collection, "hello").is_err());
    }

    #[test]
    fn test_unresolvable_match_is_dropped() {
        let temp = TempDir::new().unwrap();
        let collection = articles(temp.path());
        write_article(&collection, "a", "Hello world", true);
        // Matches textually, but "stray" has no .md document to resolve to.
        fs::write(collection.folder_path().join("stray.txt"), "hello stray").unwrap();

        let finder = FileFinder::new(search_config());
        let results = finder.find(&collection, "hello").unwrap();

        assert_eq!(ids(&results), vec!["a"]);
    }

    #[test]
    fn test_walk_is_recursive_and_ids_resolve_at_the_folder_root() {
        let temp = TempDir::new().unwrap();
        let collection = articles(temp.path());
        write_article(&collection, "a", "Hello world", true);

        // A nested copy matches textually; its id resolves to the root
        // document, so the entry appears once per matching file.
        let nested = collection.folder_path().join("archive");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("a.md"), "hello again").unwrap();

        let finder = FileFinder::new(search_config());
        let results = finder.find(&collection, "hello").unwrap();

        assert_eq!(ids(&results), vec!["a", "a"]);
    }

    #[test]
    fn test_results_follow_file_name_order() {
        let temp = TempDir::new().unwrap();
        let collection = articles(temp.path());
        write_article(&collection, "zebra", "shared term", true);
        write_article(&collection, "alpha", "shared term", true);
        write_article(&collection, "mid", "shared term", true);

        let finder = FileFinder::new(search_config());
        let results = finder.find(&collection, "shared").unwrap();

        assert_eq!(ids(&results), vec!["alpha", "mid", "zebra"]);
    }

    #[test]
    fn test_shell_metacharacter_query_is_literal() {
        let temp = TempDir::new().unwrap();
        let collection = articles(temp.path());
        write_article(&collection, "a", "Hello world", true);
        write_article(&collection, "danger", "contains \"; rm -rf /\" verbatim", true);

        let finder = FileFinder::new(search_config());

        let results = finder.find(&collection, "\"; rm -rf /\"").unwrap();
        assert_eq!(ids(&results), vec!["danger"]);

        assert!(finder.find(&collection, "`echo pwned`").unwrap().is_empty());
        assert!(temp.path().exists());
    }

    #[test]
    fn test_regex_metacharacter_query_is_literal() {
        let temp = TempDir::new().unwrap();
        let collection = articles(temp.path());
        write_article(&collection, "a", "Hello world", true);

        let finder = FileFinder::new(search_config());
        // ".*" as a pattern would match everything; as a literal it matches nothing here.
        assert!(finder.find(&collection, ".*").unwrap().is_empty());
    }

    #[test]
    fn test_star_pattern_only_skips_matching_suffixes() {
        let temp = TempDir::new().unwrap();
        let collection = articles(temp.path());
        write_article(&collection, "guide.tmpl", "hello world", true);

        let finder = FileFinder::new(SearchConfig {
            skip_patterns: vec!["*.tmp".to_string()],
            max_file_size_mb: 10,
        });

        // "guide.tmpl.md" contains ".tmp" but does not end with it.
        let results = finder.find(&collection, "hello").unwrap();
        assert_eq!(ids(&results), vec!["guide.tmpl"]);

        fs::write(collection.folder_path().join("leftover.tmp"), "hello leftover").unwrap();
        let results = finder.find(&collection, "leftover").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_directory_pattern_skips_nested_files() {
        let temp = TempDir::new().unwrap();
        let collection = articles(temp.path());
        write_article(&collection, "a", "Hello world", true);

        let hidden = collection.folder_path().join(".git");
        fs::create_dir_all(&hidden).unwrap();
        fs::write(hidden.join("a.md"), "hello from git internals").unwrap();

        let finder = FileFinder::new(SearchConfig {
            skip_patterns: vec![".git/*".to_string()],
            max_file_size_mb: 10,
        });

        let results = finder.find(&collection, "hello").unwrap();
        assert_eq!(ids(&results), vec!["a"]);
    }

    #[test]
    fn test_whitespace_stem_is_dropped_not_fatal() {
        let temp = TempDir::new().unwrap();
        let collection = articles(temp.path());
        write_article(&collection, "a", "Hello world", true);
        fs::write(collection.folder_path().join("  .md"), "hello blank").unwrap();

        let finder = FileFinder::new(search_config());
        let results = finder.find(&collection, "hello").unwrap();

        assert_eq!(ids(&results), vec!["a"]);
    }

    #[test]
    fn test_skip_patterns_exclude_files() {
        let temp = TempDir::new().unwrap();
        let collection = articles(temp.path());
        write_article(&collection, "a", "Hello world", true);

        let finder = FileFinder::new(SearchConfig {
            skip_patterns: vec!["a.md".to_string()],
            max_file_size_mb: 10,
        });

        assert!(finder.find(&collection, "hello").unwrap().is_empty());
    }
}
