// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    /// Input or blob failed a shape, length, emptiness or hex check.
    /// Always raised before any cryptographic work.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Decrypted text was not UTF-8 under `TextDecoding::Strict`
    #[error("decrypted text is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

impl CodecError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        CodecError::InvalidInput(reason.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CodecError::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
