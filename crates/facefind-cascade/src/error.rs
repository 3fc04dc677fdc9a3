use std::path::PathBuf;

/// Errors returned by the cascade detectors.
#[derive(thiserror::Error, Debug)]
pub enum CascadeError {
    #[error("face model file not found: {path}")]
    ModelNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to load face model: {0}")]
    ModelLoad(String),
}
