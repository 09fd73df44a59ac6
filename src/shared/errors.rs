use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Duplicate navigation title: {0}")]
    DuplicateTitle(String),

    #[error("Title producer failed: {0}")]
    TitleProducer(#[source] anyhow::Error),

    #[error("Invalid namespace path: {0:?}")]
    InvalidPath(String),

    #[error("General view of server {server} diverges from its detailed view")]
    ProjectionMismatch { server: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
