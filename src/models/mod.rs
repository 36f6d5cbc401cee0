// file: src/models/mod.rs
// description: document model traits and module exports
// reference: internal module structure

pub mod collection;
pub mod entry;

use crate::error::Result;
use std::path::Path;

pub use collection::Collection;
pub use entry::Entry;

/// A document collection backed by a folder of files.
pub trait Storable {
    fn folder_path(&self) -> &Path;
    fn extension(&self) -> &str;
}

/// A document variant that knows whether it is publicly visible.
pub trait Publishable {
    fn is_published(&self) -> bool;
}

/// Resolves a filename-derived id to a live document.
///
/// Passed explicitly by the caller per collection, so lookups never
/// depend on runtime type discovery.
pub trait Resolver {
    type Doc;

    fn resolve(&self, id: &str) -> Result<Option<Self::Doc>>;
}
