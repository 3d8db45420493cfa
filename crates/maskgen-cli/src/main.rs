//! maskgen CLI - Compile numbering-plan ranges into dial-plan masks.

use clap::Parser;
use maskgen_cli::commands;
use maskgen_cli::cli::{ConfigAction, ConfigArgs};
use maskgen_cli::{Cli, Command, Config, Formatter};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the stderr subscriber; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn run(cli: Cli) -> maskgen_cli::Result<()> {
    let path = Config::resolve_path(cli.config.as_deref())?;
    let cli_format = cli.format;
    let no_color = cli.no_color;
    let command = cli.into_command()?;

    // `config init` must be able to replace a broken file
    let config = match Config::load_from(&path) {
        Ok(config) => config,
        Err(e) if is_init(&command) => {
            warn!(error = %e, "Ignoring unreadable configuration");
            Config::default()
        }
        Err(e) => return Err(e),
    };

    // Determine output format
    let format = cli_format.map(Into::into).unwrap_or(config.output.format);

    // Determine color setting
    let color_enabled = !no_color && config.output.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match command {
        Command::Generate(args) => {
            let summary = commands::execute_generate(args, &config, &formatter).await?;
            if summary.skipped > 0 {
                eprintln!(
                    "{}",
                    formatter.warning(&format!(
                        "{} of {} row(s) skipped",
                        summary.skipped, summary.rows
                    ))
                );
            }
        }
        Command::Range(args) => {
            commands::execute_range(args, &config, &formatter).await?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, &path, &formatter).await?;
        }
    }

    Ok(())
}

fn is_init(command: &Command) -> bool {
    matches!(
        command,
        Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. }
        })
    )
}
