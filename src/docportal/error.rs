use thiserror::Error;

pub type Result<T> = std::result::Result<T, PortalError>;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("IO error: {0}")]
    Io(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("Data source error: {0}")]
    Source(String),

    #[error("{0}")]
    Api(String),
}
