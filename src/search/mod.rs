// file: src/search/mod.rs
// description: full-text folder search module exports
// reference: internal module structure

pub mod finder;
pub mod matcher;

pub use finder::FileFinder;
pub use matcher::ContentMatcher;
