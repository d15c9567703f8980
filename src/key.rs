// src/key.rs
//! Passphrase → cipher key derivation
//!
//! One SHA-256 pass over the passphrase's UTF-8 bytes. No salt, no
//! iteration count: frames produced elsewhere with the same scheme must keep
//! decoding, so this cannot be swapped for a stretching KDF.

use sha2::{Digest, Sha256};

use crate::aliases::DerivedKey32;
use crate::consts::KEY_LEN;

/// Derive the 256-bit AES key for `passphrase`
#[inline]
pub fn derive_key(passphrase: &str) -> DerivedKey32 {
    let digest: [u8; KEY_LEN] = Sha256::digest(passphrase.as_bytes()).into();
    DerivedKey32::new(digest)
}
