use super::DataSource;
use crate::error::{PortalError, Result};
use crate::model::{Document, Resource};
use std::fs;
use std::path::{Path, PathBuf};

pub const DOCS_FILE: &str = "docs.json";
pub const RESOURCES_FILE: &str = "resources.json";

/// Production source: the two collections live as fixed JSON files under a
/// data directory, the same files the static portal serves.
pub struct FileSource {
    data_dir: PathBuf,
    docs_file: String,
    resources_file: String,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            docs_file: DOCS_FILE.to_string(),
            resources_file: RESOURCES_FILE.to_string(),
        }
    }

    pub fn with_files(mut self, docs_file: &str, resources_file: &str) -> Self {
        self.docs_file = docs_file.to_string();
        self.resources_file = resources_file.to_string();
        self
    }

    pub fn docs_path(&self) -> PathBuf {
        self.data_dir.join(&self.docs_file)
    }

    pub fn resources_path(&self) -> PathBuf {
        self.data_dir.join(&self.resources_file)
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>> {
        if !path.exists() {
            return Err(PortalError::Source(format!(
                "{} not found",
                path.display()
            )));
        }
        let content = fs::read_to_string(path).map_err(PortalError::Io)?;
        serde_json::from_str(&content).map_err(PortalError::Serialization)
    }
}

impl DataSource for FileSource {
    fn load_documents(&self) -> Result<Vec<Document>> {
        self.read_json(&self.docs_path())
    }

    fn load_resources(&self) -> Result<Vec<Resource>> {
        self.read_json(&self.resources_path())
    }
}
