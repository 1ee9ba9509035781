//! Media format error types
//!
//! Format values arriving from the engine are trusted as-is; the only
//! fallible surface in this crate is parsing names back into typed
//! values.

use thiserror::Error;

/// Main error type for media format operations
#[derive(Error, Debug)]
pub enum MediaFormatError {
    /// Audio codec name was not recognized
    #[error("Unknown audio codec: {name}")]
    UnknownAudioCodec {
        /// Name that failed to parse
        name: String,
    },

    /// Video codec name was not recognized
    #[error("Unknown video codec: {name}")]
    UnknownVideoCodec {
        /// Name that failed to parse
        name: String,
    },

    /// Resolution string did not have the `{width}x{height}` shape
    #[error("Invalid resolution: {value}")]
    InvalidResolution {
        /// Value that failed to parse
        value: String,
    },
}

/// Result type alias for media format operations
pub type MediaFormatResult<T> = Result<T, MediaFormatError>;
