// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{CmsError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub content: ContentConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    pub root_path: PathBuf,
    pub extension: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub skip_patterns: Vec<String>,
    pub max_file_size_mb: usize,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("FLATFILE_CMS")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| CmsError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| CmsError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            content: ContentConfig {
                root_path: PathBuf::from("./content"),
                extension: "md".to_string(),
            },
            search: SearchConfig {
                skip_patterns: vec![".git/*".to_string(), "*.tmp".to_string()],
                max_file_size_mb: 10,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.content.extension.is_empty() {
            return Err(CmsError::Config(
                "content extension must not be empty".to_string(),
            ));
        }

        if self.content.extension.starts_with('.') {
            return Err(CmsError::Config(
                "content extension must not include a leading dot".to_string(),
            ));
        }

        if self.search.max_file_size_mb == 0 {
            return Err(CmsError::Config(
                "max_file_size_mb must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.content.extension, "md");
    }

    #[test]
    fn test_rejects_zero_max_file_size() {
        let mut config = Config::default_config();
        config.search.max_file_size_mb = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_dotted_extension() {
        let mut config = Config::default_config();
        config.content.extension = ".md".to_string();
        assert!(config.validate().is_err());
    }
}
