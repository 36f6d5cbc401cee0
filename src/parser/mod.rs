// file: src/parser/mod.rs
// description: document parsing module exports
// reference: internal module structure

pub mod frontmatter;
pub mod markdown;

pub use frontmatter::{FrontmatterParser, Matter};
pub use markdown::MarkdownRenderer;
