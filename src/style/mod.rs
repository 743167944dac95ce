//! Style module
//!
//! Construction-time attributes for the wave view, and the color type
//! they are expressed in.

pub mod attributes;
pub mod color;

pub use attributes::{load_from_file, ShapeType, WaveStyle};
pub use color::Argb;

/// Error type for style loading.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// File I/O error.
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON deserialization error.
    #[error("Style format error: {0}")]
    Json(#[from] serde_json::Error),
    /// A color string that is neither hex nor a known name.
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}
