use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

fn default_languages() -> Vec<String> {
    vec!["pt".to_string(), "en".to_string()]
}

/// Everything the pipeline needs, resolved once at startup.
///
/// The credential lives here and is handed to the pipeline constructor;
/// nothing downstream reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub languages: Vec<String>,
}

impl Config {
    /// Resolve configuration from the environment plus the optional
    /// config file. A missing API key is fatal.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            eyre::eyre!(
                "The environment variable {API_KEY_VAR} is not set. \
                 Please make sure your environment is configured correctly."
            )
        })?;

        let file = FileConfig::load().unwrap_or_default();
        Ok(Self {
            api_key,
            model: file.default_model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            languages: file.default_languages.unwrap_or_else(default_languages),
        })
    }
}

/// Optional defaults from ~/.config/ytgist/config.toml
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FileConfig {
    pub default_model: Option<String>,
    pub default_languages: Option<Vec<String>>,
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: FileConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(FileConfig::default())
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytgist")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_config() {
        let toml_str = r#"
default_model = "gemini-2.5-pro"
default_languages = ["es", "en"]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_model.as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(
            config.default_languages,
            Some(vec!["es".to_string(), "en".to_string()])
        );
    }

    #[test]
    fn test_parse_empty_file_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.default_model.is_none());
        assert!(config.default_languages.is_none());
    }

    #[test]
    fn test_parse_partial_file_config() {
        let config: FileConfig = toml::from_str(r#"default_model = "gemini-2.0-flash-lite""#).unwrap();
        assert_eq!(config.default_model.as_deref(), Some("gemini-2.0-flash-lite"));
        assert!(config.default_languages.is_none());
    }

    #[test]
    fn test_default_language_priority() {
        assert_eq!(default_languages(), vec!["pt".to_string(), "en".to_string()]);
    }
}
