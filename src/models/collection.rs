// file: src/models/collection.rs
// description: typed document folder with id-based lookup
// reference: internal data structures

use crate::config::ContentConfig;
use crate::error::Result;
use crate::models::{Entry, Resolver, Storable};
use crate::utils::Validator;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A folder of documents of one kind under the content root, such as
/// `articles/` or `pages/`.
#[derive(Debug, Clone)]
pub struct Collection {
    name: String,
    folder: PathBuf,
    extension: String,
}

impl Collection {
    pub fn new(config: &ContentConfig, name: &str) -> Self {
        Self {
            name: name.to_string(),
            folder: config.root_path.join(name),
            extension: config.extension.clone(),
        }
    }

    pub fn articles(config: &ContentConfig) -> Self {
        Self::new(config, "articles")
    }

    pub fn pages(config: &ContentConfig) -> Self {
        Self::new(config, "pages")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a document by id. Returns `None` when no file with that
    /// id exists in the folder.
    pub fn find(&self, id: &str) -> Result<Option<Entry>> {
        Validator::validate_document_id(id)?;

        let path = self.file_path(id);
        Validator::validate_markdown_extension(&path)?;
        if !path.is_file() {
            debug!("No {} entry for id {}", self.name, id);
            return Ok(None);
        }

        Entry::load(path, id.to_string()).map(Some)
    }

    /// A fresh entry for this collection, not yet written to disk.
    pub fn create(&self, id: &str) -> Result<Entry> {
        Validator::validate_document_id(id)?;

        let path = self.file_path(id);
        Validator::validate_markdown_extension(&path)?;
        Ok(Entry::new(path, id.to_string()))
    }

    /// Ids of every document currently stored in the folder.
    pub fn list_ids(&self) -> Result<Vec<String>> {
        if !self.folder.is_dir() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for dir_entry in fs::read_dir(&self.folder)? {
            let path = dir_entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }

        ids.sort();
        Ok(ids)
    }

    fn file_path(&self, id: &str) -> PathBuf {
        self.folder.join(format!("{}.{}", id, self.extension))
    }
}

impl Storable for Collection {
    fn folder_path(&self) -> &Path {
        &self.folder
    }

    fn extension(&self) -> &str {
        &self.extension
    }
}

impl Resolver for Collection {
    type Doc = Entry;

    fn resolve(&self, id: &str) -> Result<Option<Entry>> {
        self.find(id)
    }
}
