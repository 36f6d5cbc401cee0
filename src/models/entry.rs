// file: src/models/entry.rs
// description: front-matter document model with in-memory mutation and save-to-disk
// reference: internal data structures

use crate::error::{CmsError, Result};
use crate::models::Publishable;
use crate::parser::{FrontmatterParser, Matter};
use crate::utils::Validator;
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One document: a matter map and a markdown body, tied to a file
/// whose base name (minus extension) is the document id.
#[derive(Debug, Clone)]
pub struct Entry {
    id: String,
    path: PathBuf,
    matter: Matter,
    body: String,
}

impl Entry {
    /// A fresh in-memory entry that does not exist on disk yet.
    pub(crate) fn new(path: PathBuf, id: String) -> Self {
        Self {
            id,
            path,
            matter: Matter::new(),
            body: String::new(),
        }
    }

    /// Load an entry from an existing file.
    pub(crate) fn load(path: PathBuf, id: String) -> Result<Self> {
        let content = fs::read_to_string(&path).map_err(|source| CmsError::FileOperation {
            path: path.clone(),
            source,
        })?;

        let parser = FrontmatterParser::new();
        let (matter, body) = match parser.extract(&content) {
            Ok(Some((matter, body))) => (matter, body),
            Ok(None) => (Matter::new(), content),
            Err(CmsError::FrontmatterParse { message, .. }) => {
                return Err(CmsError::FrontmatterParse {
                    file: path.display().to_string(),
                    message,
                });
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            id,
            path,
            matter,
            body,
        })
    }

    /// The filename-derived id.
    pub fn filename(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn matter(&self) -> &Matter {
        &self.matter
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.matter.get(key).map(String::as_str)
    }

    /// Set a single matter value.
    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        self.matter.insert(key.to_string(), value.to_string());
        self
    }

    /// Merge the given fields into the matter map. Keys not named in
    /// `fields` keep their current values.
    pub fn set_matter(&mut self, fields: Matter) -> &mut Self {
        for (key, value) in fields {
            self.matter.insert(key, value);
        }
        self
    }

    pub fn has(&self, key: &str) -> bool {
        self.matter.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.matter.remove(key);
        self
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_body(&mut self, body: &str) -> &mut Self {
        self.body = body.to_string();
        self
    }

    /// Write matter and body back to the entry's file.
    ///
    /// The content is written to a temporary sibling first and renamed
    /// into place, so readers never observe a half-written document.
    pub fn save(&self) -> Result<&Self> {
        let parser = FrontmatterParser::new();
        let content = parser.compose(&self.matter, &self.body)?;
        Validator::validate_content_not_empty(&content)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| CmsError::FileOperation {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, &content).map_err(|source| CmsError::FileOperation {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| CmsError::FileOperation {
            path: self.path.clone(),
            source,
        })?;

        debug!("Saved entry {} to {}", self.id, self.path.display());
        Ok(self)
    }

    fn post_date(&self) -> Option<NaiveDate> {
        let raw = self.matter.get("post_date")?;

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Some(datetime.date());
        }

        None
    }
}

impl Publishable for Entry {
    /// An explicit `is_published` flag wins; otherwise a post date that
    /// is not in the future counts as published.
    fn is_published(&self) -> bool {
        if let Some(flag) = self.matter.get("is_published") {
            return flag == "true";
        }

        match self.post_date() {
            Some(date) => date <= Local::now().date_naive(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Entry {
        Entry::new(PathBuf::from("/content/articles/testing.md"), "testing".to_string())
    }

    #[test]
    fn test_set_matter_merges_instead_of_overwriting() {
        let mut article = entry();
        article.set_matter(Matter::from([
            ("title".to_string(), "title".to_string()),
            ("description".to_string(), "description".to_string()),
        ]));

        article.set("title", "New title");

        assert_eq!(article.get("title"), Some("New title"));
        assert_eq!(article.get("description"), Some("description"));
    }

    #[test]
    fn test_unnamed_keys_survive_consecutive_set_matter_calls() {
        let mut article = entry();
        article.set_matter(Matter::from([
            ("title".to_string(), "Article title".to_string()),
            ("description".to_string(), "description".to_string()),
        ]));

        article.set_matter(Matter::from([(
            "description".to_string(),
            "Article description".to_string(),
        )]));

        assert_eq!(article.get("title"), Some("Article title"));
        assert_eq!(article.get("description"), Some("Article description"));
    }

    #[test]
    fn test_filename_is_the_id() {
        assert_eq!(entry().filename(), "testing");
    }

    #[test]
    fn test_has_and_remove() {
        let mut article = entry();
        article.set("title", "Article title");

        assert!(article.has("title"));
        assert!(!article.has("summary"));

        article.remove("title");
        assert!(!article.has("title"));
    }

    #[test]
    fn test_save_rejects_a_completely_empty_document() {
        let temp = tempfile::TempDir::new().unwrap();
        let empty = Entry::new(temp.path().join("empty.md"), "empty".to_string());

        assert!(empty.save().is_err());
        assert!(!temp.path().join("empty.md").exists());
    }

    #[test]
    fn test_published_flag_wins_over_post_date() {
        let mut article = entry();
        article.set("is_published", "false");
        article.set("post_date", "2001-01-01");

        assert!(!article.is_published());

        article.set("is_published", "true");
        assert!(article.is_published());
    }

    #[test]
    fn test_past_post_date_is_published() {
        let mut article = entry();
        article.set("post_date", "2001-01-01");
        assert!(article.is_published());
    }

    #[test]
    fn test_future_post_date_is_unpublished() {
        let mut article = entry();
        article.set("post_date", "2999-01-01");
        assert!(!article.is_published());
    }

    #[test]
    fn test_no_publication_metadata_means_unpublished() {
        assert!(!entry().is_published());
    }

    #[test]
    fn test_datetime_post_date_is_accepted() {
        let mut article = entry();
        article.set("post_date", "2020-06-15 08:30:00");
        assert!(article.is_published());
    }
}
