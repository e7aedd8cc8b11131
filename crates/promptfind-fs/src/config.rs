//! Locator configuration.

use crate::error::Result;
use promptfind_core::SourceConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Directory name for promptfind configuration.
pub const CONFIG_DIR: &str = ".promptfind";
/// Configuration file name.
pub const CONFIG_FILE: &str = "config.yml";

/// Locator configuration stored in `.promptfind/config.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Folder names or paths to search for prompt files, each relative to a
    /// workspace folder or absolute.
    #[serde(default = "default_source_folders")]
    pub source_folders: Vec<String>,
}

fn default_version() -> u32 {
    1
}

fn default_source_folders() -> Vec<String> {
    vec![".prompts".to_string()]
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            source_folders: default_source_folders(),
        }
    }
}

impl LocatorConfig {
    /// Create a config with the given source folder names.
    #[must_use]
    pub fn with_source_folders(source_folders: Vec<String>) -> Self {
        Self {
            version: default_version(),
            source_folders,
        }
    }

    /// Load configuration from `<dir>/.promptfind/config.yml`.
    ///
    /// Falls back to defaults when the file does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);

        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Self = serde_yaml::from_str(&content)?;

        debug!(path = %path.display(), "Loaded config");

        Ok(config)
    }

    /// Write this configuration to `<dir>/.promptfind/config.yml`.
    ///
    /// # Errors
    /// Returns error if the directory cannot be created or the file written.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<()> {
        let config_dir = dir.as_ref().join(CONFIG_DIR);
        fs::create_dir_all(&config_dir)?;

        let path = config_dir.join(CONFIG_FILE);
        fs::write(&path, serde_yaml::to_string(self)?)?;

        info!(path = %path.display(), "Wrote config");

        Ok(())
    }
}

impl SourceConfig for LocatorConfig {
    fn source_folders(&self) -> Vec<String> {
        self.source_folders.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_file_missing() {
        let tmp = TempDir::new().unwrap();
        let config = LocatorConfig::load(tmp.path()).unwrap();

        assert_eq!(config.version, 1);
        assert_eq!(config.source_folders, vec![".prompts".to_string()]);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let config =
            LocatorConfig::with_source_folders(vec!["prompts".into(), "/opt/prompts".into()]);
        config.save(tmp.path()).unwrap();

        let loaded = LocatorConfig::load(tmp.path()).unwrap();
        assert_eq!(loaded.source_folders, config.source_folders);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let tmp = TempDir::new().unwrap();
        let config_dir = tmp.path().join(CONFIG_DIR);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join(CONFIG_FILE), "version: 2\n").unwrap();

        let loaded = LocatorConfig::load(tmp.path()).unwrap();
        assert_eq!(loaded.version, 2);
        assert_eq!(loaded.source_folders, vec![".prompts".to_string()]);
    }

    #[test]
    fn test_source_config_trait() {
        let config = LocatorConfig::default();
        assert_eq!(
            SourceConfig::source_folders(&config),
            vec![".prompts".to_string()]
        );
    }
}
