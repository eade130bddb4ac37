//! Error types for the rendering pipeline.

use thiserror::Error;

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Reasons a render can fail.
///
/// [`crate::render::render`] collapses all of these into `None`; use
/// [`crate::render::try_render`] to see which one happened.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The requested raster dimension was zero or above [`crate::encoder::MAX_SIZE`].
    #[error("Requested size must be between 1 and {max}, got {0}", max = crate::encoder::MAX_SIZE)]
    InvalidSize(u32),

    /// Nothing to encode.
    #[error("Payload is empty")]
    EmptyPayload,

    /// The symbol encoder could not represent the payload.
    #[error("Encoding failed: {0}")]
    Encoding(String),

    /// The bit matrix contains no dark modules, so no finder geometry exists.
    #[error("Bit matrix contains no dark modules")]
    DegenerateMatrix,

    /// Logo decoding or scaling failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A color string could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
