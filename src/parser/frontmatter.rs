// file: src/parser/frontmatter.rs
// description: YAML frontmatter extraction and composition for document files
// reference: https://docs.rs/yaml-rust

use crate::error::{CmsError, Result};
use std::collections::BTreeMap;
use yaml_rust::{Yaml, YamlEmitter, YamlLoader};

/// Front matter fields, ordered by key so saved files are stable.
pub type Matter = BTreeMap<String, String>;

pub struct FrontmatterParser;

impl FrontmatterParser {
    pub fn new() -> Self {
        Self
    }

    /// Split a raw document into its front matter fields and body.
    ///
    /// Returns `None` when the content carries no `---` fenced header;
    /// the whole content is then body.
    pub fn extract(&self, content: &str) -> Result<Option<(Matter, String)>> {
        if !content.starts_with("---") {
            return Ok(None);
        }

        let parts: Vec<&str> = content.splitn(3, "---").collect();

        if parts.len() < 3 {
            return Ok(None);
        }

        let yaml_content = parts[1].trim();
        let body = parts[2].trim_start_matches(['\r', '\n']);

        let docs =
            YamlLoader::load_from_str(yaml_content).map_err(|e| CmsError::FrontmatterParse {
                file: "frontmatter".to_string(),
                message: format!("YAML parse error: {}", e),
            })?;

        let mut fields = Matter::new();

        if let Some(Yaml::Hash(hash)) = docs.first() {
            for (key, value) in hash {
                if let (Yaml::String(k), Some(v)) = (key, Self::scalar_to_string(value)) {
                    fields.insert(k.clone(), v);
                }
            }
        }

        Ok(Some((fields, body.to_string())))
    }

    /// Render front matter fields and a body back into file content.
    pub fn compose(&self, matter: &Matter, body: &str) -> Result<String> {
        if matter.is_empty() {
            return Ok(body.to_string());
        }

        let mut hash = yaml_rust::yaml::Hash::new();
        for (key, value) in matter {
            hash.insert(Yaml::String(key.clone()), Yaml::String(value.clone()));
        }

        let mut out = String::new();
        {
            let mut emitter = YamlEmitter::new(&mut out);
            emitter
                .dump(&Yaml::Hash(hash))
                .map_err(|e| CmsError::FrontmatterParse {
                    file: "frontmatter".to_string(),
                    message: format!("YAML emit error: {:?}", e),
                })?;
        }

        // The emitter already opens the document with "---".
        out.push_str("\n---\n\n");
        out.push_str(body);
        if !out.ends_with('\n') {
            out.push('\n');
        }

        Ok(out)
    }

    fn scalar_to_string(value: &Yaml) -> Option<String> {
        match value {
            Yaml::String(s) => Some(s.clone()),
            Yaml::Integer(i) => Some(i.to_string()),
            Yaml::Real(r) => Some(r.clone()),
            Yaml::Boolean(b) => Some(b.to_string()),
            Yaml::Null => Some(String::new()),
            _ => None,
        }
    }
}

impl Default for FrontmatterParser {
    fn default() -> Self {
        Self::new()
    }
}
