// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

use crate::codec::TextDecoding;
use crate::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, TEXT_DECODING_ENV};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_text")]
    pub text: TextConfig,
    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextConfig {
    #[serde(default)]
    pub decoding: TextDecoding,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            text: default_text(),
            logging: default_logging(),
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once per process; falls back to defaults if the file is
/// missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut conf = if Path::new(&config_path).exists() {
            match load_from(&config_path) {
                Ok(conf) => conf,
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("ignoring {config_path}: {_e}");
                    Config::default()
                }
            }
        } else {
            Config::default()
        };

        apply_env_overrides(&mut conf);
        conf
    })
}

/// Read and parse a TOML config file; missing sections take defaults
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn apply_env_overrides(conf: &mut Config) {
    if let Ok(value) = std::env::var(TEXT_DECODING_ENV) {
        match value.parse::<TextDecoding>() {
            Ok(decoding) => conf.text.decoding = decoding,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("ignoring {TEXT_DECODING_ENV}={value}: {_e}");
            }
        }
    }
}
