//! Registry download and local loading
//!
//! # Features
//!
//! - Async HTTP download of the registry CSV
//! - Retry logic with exponential backoff
//! - Timeout handling
//! - Local files as an offline alternative
//!
//! # Examples
//!
//! ```no_run
//! use maskgen_registry::{RegistryClient, RegistryConfig, Source};
//!
//! # async fn example() -> Result<(), maskgen_registry::RegistryError> {
//! let client = RegistryClient::new(RegistryConfig::default())?;
//! let text = client.load(&Source::Url(client.config().url.clone())).await?;
//! println!("{} bytes of registry", text.len());
//! # Ok(())
//! # }
//! ```

use crate::{encoding, RegistryConfig, RegistryError};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Delay before the first retry; doubles on every further attempt
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

/// Where to read the registry from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Download over HTTP(S)
    Url(String),
    /// Read a local copy
    File(PathBuf),
}

/// Loads registry text from the network or disk
pub struct RegistryClient {
    config: RegistryConfig,
    client: reqwest::Client,
    backoff: Duration,
}

impl RegistryClient {
    /// Create a new client from the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Config`] if the configuration is invalid and
    /// [`RegistryError::Communication`] if the HTTP client cannot be built.
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        config.validate().map_err(RegistryError::Config)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            config,
            client,
            backoff: DEFAULT_BACKOFF,
        })
    }

    /// Set the base delay between attempts
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Load and decode registry text from `source`
    pub async fn load(&self, source: &Source) -> Result<String, RegistryError> {
        let bytes = match source {
            Source::Url(url) => self.fetch(url).await?,
            Source::File(path) => {
                info!(path = %path.display(), "Reading registry file");
                tokio::fs::read(path).await?
            }
        };
        debug!(bytes = bytes.len(), encoding = %self.config.encoding, "Decoding registry");
        encoding::decode(&bytes, &self.config.encoding)
    }

    /// Download the raw registry body
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The server answers 404 (no retry)
    /// - Every attempt fails with a transport error or non-success status
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, RegistryError> {
        info!(url, "Downloading registry");

        // Retry logic with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.config.max_retries {
            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response.bytes().await?;
                        info!(bytes = body.len(), "Registry downloaded");
                        return Ok(body.to_vec());
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(RegistryError::NotFound(url.to_string()));
                    } else {
                        last_error = Some(RegistryError::Status {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                    }
                }
                Err(e) => {
                    last_error = Some(RegistryError::Communication(format!(
                        "Request failed: {}",
                        e
                    )));
                }
            }

            attempts += 1;
            if attempts < self.config.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = self.backoff * 2u32.pow(attempts - 1);
                warn!(attempt = attempts, ?delay, "Registry download failed, retrying");
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| RegistryError::Communication("Max retries exceeded".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_with_retries(max_retries: u32) -> RegistryConfig {
        RegistryConfig {
            max_retries,
            ..RegistryConfig::default()
        }
    }

    #[test]
    fn test_client_creation() {
        let client = RegistryClient::new(RegistryConfig::default()).unwrap();
        assert_eq!(client.config().max_retries, 3);
        assert_eq!(client.backoff, DEFAULT_BACKOFF);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = RegistryClient::new(config_with_retries(0));
        assert!(matches!(result, Err(RegistryError::Config(_))));
    }

    #[tokio::test]
    async fn test_fetch_error_handling() {
        // Invalid port forces a request error before any I/O
        let client = RegistryClient::new(config_with_retries(1)).unwrap();

        let result = client.fetch("http://localhost:99999/DEF-9x.csv").await;

        match result {
            Err(RegistryError::Communication(_)) => {} // Expected
            other => panic!("Expected Communication error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // "Тула" in Windows-1251
        file.write_all(&[0xD2, 0xF3, 0xEB, 0xE0]).unwrap();

        let client = RegistryClient::new(RegistryConfig::default()).unwrap();
        let text = client
            .load(&Source::File(file.path().to_path_buf()))
            .await
            .unwrap();

        assert_eq!(text, "Тула");
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let client = RegistryClient::new(RegistryConfig::default()).unwrap();
        let result = client
            .load(&Source::File(PathBuf::from("/nonexistent/DEF-9x.csv")))
            .await;

        assert!(matches!(result, Err(RegistryError::Io(_))));
    }
}
