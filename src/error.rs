//! Error types for the huffpack coder.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = core::result::Result<T, HuffError>;

/// Everything that can go wrong while encoding, decoding or (de)serializing.
#[derive(Debug, Error)]
pub enum HuffError {
    /// The container bytes are not a valid huffpack container.
    #[error("invalid container: {0}")]
    Format(String),

    /// The payload does not decode to the declared number of bytes.
    #[error("decode failed: {0}")]
    Decode(String),

    /// Corrupted in-memory state. Should never be seen with a tree built by this crate.
    #[error("internal error: {0}")]
    Internal(String),

    /// The original byte count is stored as a u32.
    #[error("input of {0} bytes exceeds the 4 GiB container limit")]
    InputTooLarge(usize),

    /// I/O error from the file helpers.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HuffError {
    /// Create a format error.
    pub fn format(message: impl Into<String>) -> Self {
        HuffError::Format(message.into())
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        HuffError::Decode(message.into())
    }
}
