// src/frame.rs
//! Wire format: `IV (16 bytes) || ciphertext (N >= 1 bytes)`
//!
//! There is no header, version byte or authentication tag. Whether a frame
//! travels as hex text or raw bytes is decided by the caller and must be
//! mirrored when decoding.

use crate::consts::{IV_LEN, MIN_FRAME_LEN};
use crate::error::{CodecError, Result};
use crate::payload::{self, Payload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    iv: [u8; IV_LEN],
    ciphertext: Vec<u8>,
}

impl Frame {
    pub(crate) fn new(iv: [u8; IV_LEN], ciphertext: Vec<u8>) -> Self {
        Self { iv, ciphertext }
    }

    /// Split raw frame bytes into IV and ciphertext
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        Self::from_vec(bytes.to_vec())
    }

    fn from_vec(mut bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() < MIN_FRAME_LEN {
            return Err(CodecError::invalid(format!(
                "frame is {} bytes, expected at least {MIN_FRAME_LEN}",
                bytes.len()
            )));
        }
        let mut iv = [0u8; IV_LEN];
        iv.copy_from_slice(&bytes[..IV_LEN]);
        bytes.drain(..IV_LEN);
        Ok(Self::new(iv, bytes))
    }

    /// Parse a hex-encoded frame (either case accepted)
    pub fn from_hex(text: &str) -> Result<Self> {
        Self::from_payload(Payload::Text(text.to_owned()))
    }

    /// Parse a frame from either representation
    pub fn from_payload(blob: Payload) -> Result<Self> {
        Self::from_vec(payload::frame_bytes(blob)?)
    }

    pub fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Total frame length in bytes
    pub fn len(&self) -> usize {
        IV_LEN + self.ciphertext.len()
    }

    /// Always false; a parsed frame carries at least one ciphertext byte
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Lowercase hex of the frame bytes
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub(crate) fn into_parts(self) -> ([u8; IV_LEN], Vec<u8>) {
        (self.iv, self.ciphertext)
    }
}
