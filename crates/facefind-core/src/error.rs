/// Errors produced by core buffer constructors.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("invalid image buffer length (expected {expected} bytes, got {got})")]
    InvalidBuffer { expected: usize, got: usize },

    #[error("invalid image dimensions (width={width}, height={height})")]
    InvalidDimensions { width: usize, height: usize },
}
