//! Configuration for registry ingestion

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default registry URL (mobile DEF codes 9xx)
pub const DEFAULT_URL: &str = "https://rossvyaz.gov.ru/docs/articles/DEF-9x.csv";

/// Default timeout for a single download attempt (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of download attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Encoding the regulator publishes in
pub const DEFAULT_ENCODING: &str = "windows-1251";

/// Number of columns a registry row is meant to have
pub const RECORD_FIELDS: usize = 6;

/// Configuration for loading the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Registry CSV URL
    pub url: String,

    /// Timeout for a single download attempt (seconds)
    pub timeout_secs: u64,

    /// Download attempts before giving up
    pub max_retries: u32,

    /// Encoding label of the CSV body (WHATWG label)
    pub encoding: String,

    /// Separators allowed per line; extra ones are turned into spaces
    pub field_count: usize,
}

impl RegistryConfig {
    /// Get the download timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.max_retries == 0 {
            return Err("max_retries must be greater than 0".to_string());
        }
        if encoding_rs::Encoding::for_label(self.encoding.as_bytes()).is_none() {
            return Err(format!("unknown encoding label '{}'", self.encoding));
        }
        if self.field_count < RECORD_FIELDS {
            return Err(format!("field_count must be at least {}", RECORD_FIELDS));
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            encoding: DEFAULT_ENCODING.to_string(),
            field_count: RECORD_FIELDS,
        }
    }
}
