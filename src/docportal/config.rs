use crate::error::{PortalError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "portal.json";

/// Configuration for a portal data directory, stored as `portal.json` next
/// to the collection files. Every field has a default so the file is
/// optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortalConfig {
    /// Filename of the document collection within the data directory
    #[serde(default = "default_docs_file")]
    pub docs_file: String,

    /// Filename of the resource collection within the data directory
    #[serde(default = "default_resources_file")]
    pub resources_file: String,
}

fn default_docs_file() -> String {
    crate::source::fs::DOCS_FILE.to_string()
}

fn default_resources_file() -> String {
    crate::source::fs::RESOURCES_FILE.to_string()
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            docs_file: default_docs_file(),
            resources_file: default_resources_file(),
        }
    }
}

impl PortalConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let config_path = data_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PortalError::Io)?;
        let config: PortalConfig =
            serde_json::from_str(&content).map_err(PortalError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, data_dir: P) -> Result<()> {
        let data_dir = data_dir.as_ref();
        if !data_dir.exists() {
            fs::create_dir_all(data_dir).map_err(PortalError::Io)?;
        }

        let config_path = data_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PortalError::Serialization)?;
        fs::write(config_path, content).map_err(PortalError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filenames() {
        let config = PortalConfig::default();
        assert_eq!(config.docs_file, "docs.json");
        assert_eq!(config.resources_file, "resources.json");
    }

    #[test]
    fn load_missing_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PortalConfig::load(dir.path()).unwrap();
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let config = PortalConfig {
            docs_file: "documentos.json".to_string(),
            resources_file: "recursos.json".to_string(),
        };
        config.save(dir.path()).unwrap();

        let loaded = PortalConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"docs_file": "documentos.json"}"#,
        )
        .unwrap();

        let loaded = PortalConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.docs_file, "documentos.json");
        assert_eq!(loaded.resources_file, "resources.json");
    }
}
