// src/payload.rs
//! Text-or-binary values accepted and returned by the codec
//!
//! The representation kind of a payload decides the representation of the
//! frame: text plaintext encodes to hex text, binary plaintext to raw bytes.
//! Decoding mirrors the kind of the blob it is given.

use crate::error::{CodecError, Result};

/// A plaintext or a frame, tagged with its representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Binary(Vec<u8>),
}

/// Representation kind of a [`Payload`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Text,
    Binary,
}

impl Payload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            Payload::Text(_) => PayloadKind::Text,
            Payload::Binary(_) => PayloadKind::Binary,
        }
    }

    /// Raw bytes of the payload (UTF-8 bytes for text)
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Text(s) => s.as_bytes(),
            Payload::Binary(b) => b,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(s) => Some(s),
            Payload::Binary(_) => None,
        }
    }

    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Payload::Text(_) => None,
            Payload::Binary(b) => Some(b),
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Payload::Text(s) => Some(s),
            Payload::Binary(_) => None,
        }
    }

    pub fn into_binary(self) -> Option<Vec<u8>> {
        match self {
            Payload::Text(_) => None,
            Payload::Binary(b) => Some(b),
        }
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_owned())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(b: Vec<u8>) -> Self {
        Payload::Binary(b)
    }
}

impl From<&[u8]> for Payload {
    fn from(b: &[u8]) -> Self {
        Payload::Binary(b.to_vec())
    }
}

/// Reject an empty plaintext; the cipher never runs over zero bytes
pub(crate) fn ensure_plaintext(plain: &Payload) -> Result<()> {
    match plain {
        Payload::Text(s) if s.is_empty() => {
            Err(CodecError::invalid("expected input to be a non-empty string"))
        }
        Payload::Binary(b) if b.is_empty() => {
            Err(CodecError::invalid("expected input to be a non-empty buffer"))
        }
        _ => Ok(()),
    }
}

/// Normalize a blob to frame bytes, checking emptiness and hex shape
///
/// Frame length is checked by `Frame::parse`.
pub(crate) fn frame_bytes(blob: Payload) -> Result<Vec<u8>> {
    match blob {
        Payload::Text(s) => {
            if s.is_empty() {
                return Err(CodecError::invalid("expected input to be a non-empty string"));
            }
            hex::decode(&s).map_err(|e| CodecError::invalid(format!("malformed hex frame: {e}")))
        }
        Payload::Binary(b) => {
            if b.is_empty() {
                return Err(CodecError::invalid("expected input to be a non-empty buffer"));
            }
            Ok(b)
        }
    }
}
