use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Prompt not found: {0}")]
    RecordNotFound(String),

    #[error("Failed to load catalog from {source_name}: {message}")]
    Source {
        source_name: String,
        message: String,
    },

    #[error("Invalid config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
