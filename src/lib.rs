// src/lib.rs
//! blobcrypt — passphrase-keyed AES-256-CTR codec for text and binary blobs
//!
//! Features:
//! - SHA-256 key derivation from a passphrase
//! - Fresh random 16-byte IV per encryption, framed as `IV || ciphertext`
//! - Hex text frames for text plaintext, raw byte frames for binary plaintext
//! - Pre/post transforms for structured values (JSON built in)
//!
//! # Security
//!
//! Frames are confidential but not authenticated. A wrong passphrase is not
//! detected, and flipping a ciphertext bit flips the same plaintext bit.
//! The key is a single unsalted SHA-256 pass over the passphrase; use a
//! high-entropy passphrase. Both properties are kept for compatibility with
//! existing frames.
//!
//! ```
//! use blobcrypt::{decode, encode, Payload};
//!
//! let blob = encode("secret", "hello world")?;
//! assert_eq!(blob.len(), 2 * (16 + 11));
//! assert_eq!(decode("secret", blob)?, Payload::from("hello world"));
//! # Ok::<(), blobcrypt::CodecError>(())
//! ```

pub mod aliases;
pub mod cipher;
pub mod codec;
pub mod config;
pub mod consts;
pub mod error;
pub mod frame;
pub mod key;
pub mod payload;
pub mod transform;

// Re-export everything users need at the crate root
pub use aliases::DerivedKey32;
pub use codec::{decode, decode_with, encode, encode_with, Codec, TextDecoding};
pub use config::load as load_config;
pub use error::{CodecError, Result};
pub use frame::Frame;
pub use key::derive_key;
pub use payload::{Payload, PayloadKind};
pub use transform::{FnTransform, JsonTransform, JsonTransformError, Transform};
