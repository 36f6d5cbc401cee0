// file: src/parser/markdown.rs
// description: markdown body rendering with pulldown-cmark
// reference: https://docs.rs/pulldown-cmark

use pulldown_cmark::{Event, Parser, html};

pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a document body to HTML.
    pub fn render_html(&self, body: &str) -> String {
        let parser = Parser::new(body);
        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }

    /// Strip markup from a document body, keeping the readable text.
    pub fn plain_text(&self, body: &str) -> String {
        let parser = Parser::new(body);
        let mut plain = String::new();

        for event in parser {
            match event {
                Event::Text(text) | Event::Code(text) => {
                    plain.push_str(&text);
                    plain.push(' ');
                }
                Event::SoftBreak | Event::HardBreak => {
                    plain.push('\n');
                }
                _ => {}
            }
        }

        plain.trim().to_string()
    }

    /// Short plain-text excerpt used for listings.
    pub fn excerpt(&self, body: &str, max_length: usize) -> String {
        let text = self.plain_text(body);
        let mut excerpt: String = text.chars().take(max_length).collect();
        if text.chars().count() > max_length {
            excerpt.push_str("...");
        }
        excerpt
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
