use super::DataSource;
use crate::error::{PortalError, Result};
use crate::model::{Document, Resource};

/// In-memory source for tests: collections are injected directly, and
/// either load can be made to fail.
#[derive(Debug, Default)]
pub struct InMemorySource {
    documents: Vec<Document>,
    resources: Vec<Resource>,
    fail_documents: bool,
    fail_resources: bool,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(mut self, documents: Vec<Document>) -> Self {
        self.documents = documents;
        self
    }

    pub fn with_resources(mut self, resources: Vec<Resource>) -> Self {
        self.resources = resources;
        self
    }

    pub fn failing_documents(mut self) -> Self {
        self.fail_documents = true;
        self
    }

    pub fn failing_resources(mut self) -> Self {
        self.fail_resources = true;
        self
    }
}

impl DataSource for InMemorySource {
    fn load_documents(&self) -> Result<Vec<Document>> {
        if self.fail_documents {
            return Err(PortalError::Source("documents unavailable".to_string()));
        }
        Ok(self.documents.clone())
    }

    fn load_resources(&self) -> Result<Vec<Resource>> {
        if self.fail_resources {
            return Err(PortalError::Source("resources unavailable".to_string()));
        }
        Ok(self.resources.clone())
    }
}
