// File: src/error.rs
use thiserror::Error;

/// Errors surfaced by the glyph core.
///
/// Rejected connections, an empty undo and a dictionary miss are normal
/// outcomes (`false` / `None`) and never show up here.
#[derive(Debug, Error)]
pub enum GlyphError {
    /// Positional access past the end of a container or symbol.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Text that the strict decoder refused.
    #[error("invalid symbol encoding: {text:?}")]
    InvalidEncoding { text: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("binary encoding error: {0}")]
    Encode(#[from] bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GlyphError>;
