// src/cipher.rs
//! AES-256-CTR keystream; encryption and decryption are the same operation

use aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};

use crate::aliases::DerivedKey32;
use crate::consts::IV_LEN;

/// 128-bit big-endian counter, wrapping mod 2^128 like OpenSSL's `aes-256-ctr`
type Aes256Ctr = ctr::Ctr128BE<Aes256>;

/// XOR the keystream for (`key`, `iv`) into `buf` in place
pub fn apply_keystream(key: &DerivedKey32, iv: &[u8; IV_LEN], buf: &mut [u8]) {
    let mut cipher = Aes256Ctr::new(key.expose_secret().into(), iv.into());
    cipher.apply_keystream(buf);
}
