use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaceCropError {
    #[error("failed to decode image: {0}")]
    DecodeError(String),

    #[error("image dimensions are zero")]
    ZeroDimensions,

    #[error("zoom factor must be > 0, got {0}")]
    InvalidZoom(f32),

    #[error("no face detector configured")]
    NoDetector,

    #[error("face detection model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("failed to write crop {id}: {message}")]
    WriteError {
        /// Sequential id of the crop that failed to persist.
        id: u32,
        /// Encoder or filesystem error text.
        message: String,
    },
}
