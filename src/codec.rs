// src/codec.rs
//! Encode/decode, the public face of the crate
//!
//! `encode` turns a non-empty [`Payload`] into a frame of the same kind:
//! text plaintext yields lowercase hex text, binary plaintext yields raw
//! bytes. `decode` reverses it, returning text for a text frame and binary
//! for a binary frame.
//!
//! The frame carries no authentication tag. Decoding with the wrong
//! passphrase, or decoding a tampered frame, succeeds and returns garbage of
//! the right length.

use std::str::FromStr;

use serde::Deserialize;

use crate::cipher::apply_keystream;
use crate::config::Config;
use crate::consts::IV_LEN;
use crate::error::{CodecError, Result};
use crate::frame::Frame;
use crate::key::derive_key;
use crate::payload::{self, Payload};
use crate::transform::Transform;

/// How decrypted bytes of a text frame become a `String`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoding {
    /// Invalid UTF-8 is replaced with U+FFFD
    #[default]
    Lossy,
    /// Invalid UTF-8 fails with [`CodecError::Utf8`]
    Strict,
}

impl FromStr for TextDecoding {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lossy" => Ok(TextDecoding::Lossy),
            "strict" => Ok(TextDecoding::Strict),
            other => Err(CodecError::invalid(format!(
                "unknown text decoding {other:?}, expected \"lossy\" or \"strict\""
            ))),
        }
    }
}

/// Codec with an explicit text decoding policy
///
/// The free functions in this module use `Codec::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Codec {
    text_decoding: TextDecoding,
}

impl Codec {
    pub fn new(text_decoding: TextDecoding) -> Self {
        Self { text_decoding }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.text.decoding)
    }

    pub fn text_decoding(&self) -> TextDecoding {
        self.text_decoding
    }

    /// Encrypt `plain` under `passphrase` with a fresh random IV
    pub fn encode(&self, passphrase: &str, plain: Payload) -> Result<Payload> {
        payload::ensure_plaintext(&plain)?;
        Ok(seal(passphrase, plain, rand::random()))
    }

    /// Decrypt a frame produced by [`Codec::encode`] with the same passphrase
    pub fn decode(&self, passphrase: &str, blob: Payload) -> Result<Payload> {
        let kind = blob.kind();
        let frame = Frame::from_payload(blob)?;
        let (iv, mut buf) = frame.into_parts();

        let key = derive_key(passphrase);
        apply_keystream(&key, &iv, &mut buf);

        #[cfg(feature = "logging")]
        tracing::debug!(?kind, len = buf.len(), "decoded frame");

        match kind {
            payload::PayloadKind::Binary => Ok(Payload::Binary(buf)),
            payload::PayloadKind::Text => match self.text_decoding {
                TextDecoding::Lossy => {
                    Ok(Payload::Text(String::from_utf8_lossy(&buf).into_owned()))
                }
                TextDecoding::Strict => Ok(Payload::Text(String::from_utf8(buf)?)),
            },
        }
    }

    /// Run `transform.pre` on `value`, then encode the result
    pub fn encode_value<T: Transform>(
        &self,
        passphrase: &str,
        value: &T::Value,
        transform: &T,
    ) -> std::result::Result<Payload, T::Error> {
        let plain = transform.pre(value)?;
        Ok(self.encode(passphrase, plain)?)
    }

    /// Decode `blob`, then run `transform.post` on the recovered payload
    pub fn decode_value<T: Transform>(
        &self,
        passphrase: &str,
        blob: Payload,
        transform: &T,
    ) -> std::result::Result<T::Value, T::Error> {
        let plain = self.decode(passphrase, blob)?;
        transform.post(plain)
    }
}

/// Encrypt `plain` under `passphrase`; see [`Codec::encode`]
pub fn encode(passphrase: &str, plain: impl Into<Payload>) -> Result<Payload> {
    Codec::default().encode(passphrase, plain.into())
}

/// Decrypt `blob` under `passphrase`; see [`Codec::decode`]
pub fn decode(passphrase: &str, blob: impl Into<Payload>) -> Result<Payload> {
    Codec::default().decode(passphrase, blob.into())
}

/// Encode `value` after mapping it to a payload with `pre`
///
/// Errors from `pre` are returned as-is; codec errors are converted with
/// `E: From<CodecError>`.
pub fn encode_with<V, E, F>(passphrase: &str, value: V, pre: F) -> std::result::Result<Payload, E>
where
    F: FnOnce(V) -> std::result::Result<Payload, E>,
    E: From<CodecError>,
{
    let plain = pre(value)?;
    Ok(Codec::default().encode(passphrase, plain)?)
}

/// Decode `blob`, then map the recovered payload with `post`
pub fn decode_with<U, E, F>(
    passphrase: &str,
    blob: impl Into<Payload>,
    post: F,
) -> std::result::Result<U, E>
where
    F: FnOnce(Payload) -> std::result::Result<U, E>,
    E: From<CodecError>,
{
    let plain = Codec::default().decode(passphrase, blob.into())?;
    post(plain)
}

/// Encrypt an already validated plaintext with the given IV
fn seal(passphrase: &str, plain: Payload, iv: [u8; IV_LEN]) -> Payload {
    let key = derive_key(passphrase);

    let (is_text, mut buf) = match plain {
        Payload::Text(s) => (true, s.into_bytes()),
        Payload::Binary(b) => (false, b),
    };
    apply_keystream(&key, &iv, &mut buf);

    #[cfg(feature = "logging")]
    tracing::debug!(text = is_text, len = buf.len(), "encoded frame");

    let frame = Frame::new(iv, buf);
    if is_text {
        Payload::Text(frame.to_hex())
    } else {
        Payload::Binary(frame.to_bytes())
    }
}
