// src/consts.rs
//! Shared constants: wire format and configuration defaults

/// Length of the random IV that prefixes every frame
pub const IV_LEN: usize = 16;

/// Length of the derived AES-256 key
pub const KEY_LEN: usize = 32;

/// Smallest valid frame: IV plus at least one ciphertext byte
pub const MIN_FRAME_LEN: usize = IV_LEN + 1;

/// Environment variable naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "BLOBCRYPT_CONFIG";

/// Config file used when `BLOBCRYPT_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "blobcrypt.toml";

/// Environment override for the text decoding policy (`lossy` / `strict`)
pub const TEXT_DECODING_ENV: &str = "BLOBCRYPT_TEXT_DECODING";

/// Default tracing filter for the CLI
pub const DEFAULT_LOG_FILTER: &str = "warn";
