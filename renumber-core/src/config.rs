use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default filename prefix when --prefix is not given
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Default preview format: "table", "summary", or "none"
    #[serde(default = "default_preview")]
    pub preview_format: String,

    /// Require the whole filename to match `<prefix>_<index>.txt` by default
    #[serde(default)]
    pub anchored: bool,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            preview_format: default_preview(),
            anchored: false,
            use_color: None,
        }
    }
}

fn default_prefix() -> String {
    crate::DEFAULT_PREFIX.to_string()
}

fn default_preview() -> String {
    "table".to_string()
}

impl Config {
    /// Load config from renumber.toml in the current directory if it exists
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join("renumber.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        // Return default config if no config file exists
        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_the_reference_tool() {
        let config = Config::default();
        assert_eq!(config.defaults.prefix, "file");
        assert_eq!(config.defaults.preview_format, "table");
        assert!(!config.defaults.anchored);
        assert_eq!(config.defaults.use_color, None);
    }

    #[test]
    fn loads_partial_config_with_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("renumber.toml");
        fs::write(&path, "[defaults]\nprefix = \"Document\"\nanchored = true\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.defaults.prefix, "Document");
        assert!(config.defaults.anchored);
        assert_eq!(config.defaults.preview_format, "table");
    }

    #[test]
    fn rejects_malformed_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("renumber.toml");
        fs::write(&path, "defaults = 3\n").unwrap();

        assert!(Config::load_from_path(&path).is_err());
    }
}
