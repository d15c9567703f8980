// src/config/defaults.rs
use crate::codec::TextDecoding;
use crate::config::app::{LoggingConfig, TextConfig};
use crate::consts::DEFAULT_LOG_FILTER;

pub fn default_text() -> TextConfig {
    TextConfig {
        decoding: TextDecoding::default(),
    }
}

pub fn default_logging() -> LoggingConfig {
    LoggingConfig {
        filter: default_log_filter(),
    }
}

pub fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.into()
}
