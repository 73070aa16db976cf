//! Configuration for the theme core.
//!
//! Configuration is read from YAML. Every field is optional:
//!
//! ```yaml
//! storage_key: goGameTheme
//! storage_path: .config/spill/prefs.json
//! ```
//!
//! Paths are used as given; `~` is not expanded, and relative paths resolve
//! against the working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::store::DEFAULT_STORAGE_KEY;

/// Error returned when configuration cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config \"{}\": {message}", path.display())]
    Io { path: PathBuf, message: String },

    #[error("invalid config: {0}")]
    Parse(String),
}

/// Settings shared by the resolver and the projector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Key the theme is persisted under.
    pub storage_key: String,
    /// Backing file for a [`FileStore`](crate::FileStore), when one is used.
    pub storage_path: Option<PathBuf>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_path: None,
        }
    }
}

impl ThemeConfig {
    /// Parses a YAML document. An empty document yields the defaults.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if config.storage_key.is_empty() {
            return Err(ConfigError::Parse("storage_key must not be empty".into()));
        }
        Ok(config)
    }

    /// Reads and parses a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.storage_key, "goGameTheme");
        assert_eq!(config.storage_path, None);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(ThemeConfig::from_yaml("").unwrap(), ThemeConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ThemeConfig::from_yaml("storage_path: prefs.json\n").unwrap();
        assert_eq!(config.storage_key, "goGameTheme");
        assert_eq!(config.storage_path, Some(PathBuf::from("prefs.json")));
    }

    #[test]
    fn test_full_yaml() {
        let config = ThemeConfig::from_yaml("storage_key: spillTema\nstorage_path: /tmp/p.json\n")
            .unwrap();
        assert_eq!(config.storage_key, "spillTema");
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/p.json")));
    }

    #[test]
    fn test_tilde_is_not_expanded() {
        let config = ThemeConfig::from_yaml("storage_path: ~/p.json\n").unwrap();
        assert_eq!(config.storage_path, Some(PathBuf::from("~/p.json")));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ThemeConfig::from_yaml("default_theme: dark\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(ThemeConfig::from_yaml("storage_key: \"\"\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = ThemeConfig::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("spill.yaml");
        std::fs::write(&path, "storage_key: k\n").unwrap();
        assert_eq!(ThemeConfig::load(&path).unwrap().storage_key, "k");
    }
}
