//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use maskgen_domain::DEFAULT_WILDCARD;
use maskgen_gatekeeper::ValidationConfig;
use maskgen_registry::RegistryConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Registry source and download settings
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Row validation rules
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Mask output settings
    #[serde(default)]
    pub output: OutputSettings,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Glyph printed for a position that accepts any digit
    #[serde(default = "default_wildcard")]
    pub wildcard: char,

    /// Text printed before the code of every mask
    #[serde(default)]
    pub prefix: String,

    /// Text printed after every mask
    #[serde(default)]
    pub suffix: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One mask per line
    Text,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".maskgen").join("config.toml"))
    }

    /// The given path, or the default one.
    pub fn resolve_path(custom: Option<&Path>) -> Result<PathBuf> {
        match custom {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from file, falling back to defaults when it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let contents = fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = self.to_toml()?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.registry
            .validate()
            .map_err(|e| CliError::Config(format!("[registry] {}", e)))?;
        self.validation
            .validate()
            .map_err(|e| CliError::Config(format!("[validation] {}", e)))?;
        self.output
            .validate()
            .map_err(|e| CliError::Config(format!("[output] {}", e)))
    }
}

impl OutputSettings {
    /// Validate the output settings
    pub fn validate(&self) -> std::result::Result<(), String> {
        let glyph = self.wildcard;
        if glyph.is_ascii_digit() || glyph.is_whitespace() || glyph.is_control() {
            return Err(format!(
                "wildcard must be a printable non-digit character, got {:?}",
                glyph
            ));
        }
        Ok(())
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            wildcard: DEFAULT_WILDCARD,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_wildcard() -> char {
    DEFAULT_WILDCARD
}
