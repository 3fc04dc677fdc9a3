use std::path::PathBuf;

/// Errors returned by the mesh predictor.
#[derive(thiserror::Error, Debug)]
pub enum MeshError {
    #[error("mesh model file not found: {path}")]
    ModelNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to decode mesh model: {0}")]
    Decode(#[from] bincode::Error),

    #[error("invalid mesh model: {0}")]
    InvalidModel(String),
}
