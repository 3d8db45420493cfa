//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub async fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            println!("{}", show_config(config, path, formatter)?);
            Ok(())
        }
        ConfigAction::Init { force } => {
            println!("{}", init_config(path, force, formatter)?);
            Ok(())
        }
    }
}

/// Render the effective configuration.
fn show_config(config: &Config, path: &Path, formatter: &Formatter) -> Result<String> {
    match formatter.format() {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Text => {
            let origin = if path.exists() {
                format!("Configuration file: {}", path.display())
            } else {
                format!("No file at {}, using defaults", path.display())
            };
            Ok(format!("{}\n\n{}", formatter.info(&origin), config.to_toml()?))
        }
    }
}

/// Write the default configuration to `path`.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<String> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    Ok(formatter.success(&format!("Wrote default configuration to {}", path.display())))
}
