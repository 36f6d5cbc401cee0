// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod search;
pub mod utils;

pub use config::{Config, ContentConfig, SearchConfig};
pub use error::{CmsError, Result};
pub use models::{Collection, Entry, Publishable, Resolver, Storable};
pub use parser::{FrontmatterParser, MarkdownRenderer, Matter};
pub use search::{ContentMatcher, FileFinder};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _collection = Collection::articles(&config.content);
        let _finder = FileFinder::new(config.search);
    }
}
