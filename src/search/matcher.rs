// file: src/search/matcher.rs
// description: literal case-insensitive content matching
// reference: https://docs.rs/regex

use crate::error::{CmsError, Result};
use regex::RegexBuilder;

/// Matches file content against a query treated strictly as literal
/// text. The query is escaped before compilation, so regex and shell
/// metacharacters have no special meaning and nothing is ever handed
/// to a shell.
pub struct ContentMatcher {
    pattern: regex::Regex,
}

impl ContentMatcher {
    pub fn literal(query: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .map_err(|e| CmsError::Validation(format!("Cannot compile query: {}", e)))?;

        Ok(Self { pattern })
    }

    pub fn is_match(&self, content: &str) -> bool {
        self.pattern.is_match(content)
    }
}
