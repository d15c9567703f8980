// src/config/mod.rs
//! Configuration system for blobcrypt
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, load_from, Config, LoggingConfig, TextConfig};

mod app;
mod defaults;
