//! CLI command definitions and argument parsing.

use crate::error::{CliError, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// maskgen - Compile numbering-plan ranges into dial-plan masks.
///
/// Without a subcommand, `generate` runs with the options given.
#[derive(Debug, Parser)]
#[command(name = "maskgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(long, global = true, env = "MASKGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The command to run, with `generate` as the default
    ///
    /// Generate options given before a subcommand are an error rather than
    /// being silently dropped.
    pub fn into_command(self) -> Result<Command> {
        match self.command {
            None => Ok(Command::Generate(self.generate)),
            Some(_) if self.generate != GenerateArgs::default() => Err(CliError::InvalidInput(
                "generate options cannot be combined with a subcommand".to_string(),
            )),
            Some(command) => Ok(command),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// One mask per line (default)
    Text,
    /// JSON array of rows
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download the registry and print masks for every admitted row
    Generate(GenerateArgs),

    /// Print the masks for a single interval
    Range(RangeArgs),

    /// Show or initialize the configuration file
    Config(ConfigArgs),
}

/// Arguments for the generate command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct GenerateArgs {
    /// Registry CSV URL (overrides the configured one)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Read the registry from a local file instead of downloading it
    #[arg(short, long, conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Keep rows whose region contains this fragment (case-insensitive)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Keep rows whose operator contains this fragment (case-insensitive)
    #[arg(short, long)]
    pub operator: Option<String>,

    /// Print a `; code, from, to, capacity, operator, region` line before each row
    #[arg(short, long)]
    pub comment: bool,

    /// Text printed before the code of every mask
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Text printed after every mask
    #[arg(short, long)]
    pub suffix: Option<String>,

    /// Group rows by operator
    #[arg(short, long)]
    pub group: bool,
}

/// Arguments for the range command.
#[derive(Debug, Parser)]
pub struct RangeArgs {
    /// Lower bound (digits)
    pub low: String,

    /// Upper bound (digits, same width as the lower bound)
    pub high: String,

    /// Text printed before every mask
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Text printed after every mask
    #[arg(short, long)]
    pub suffix: Option<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration to the config path
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_generate() {
        let cli = Cli::parse_from(["maskgen"]);
        match cli.into_command().unwrap() {
            Command::Generate(args) => assert_eq!(args, GenerateArgs::default()),
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_generate_flags_without_subcommand() {
        let cli = Cli::parse_from(["maskgen", "-r", "Москва", "-c", "-g", "-p", "8"]);
        match cli.into_command().unwrap() {
            Command::Generate(args) => {
                assert_eq!(args.region.as_deref(), Some("Москва"));
                assert!(args.comment);
                assert!(args.group);
                assert_eq!(args.prefix.as_deref(), Some("8"));
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_generate_subcommand() {
        let cli = Cli::parse_from([
            "maskgen",
            "generate",
            "--file",
            "DEF-9x.csv",
            "-o",
            "мтс",
            "-s",
            "@",
        ]);
        match cli.into_command().unwrap() {
            Command::Generate(args) => {
                assert_eq!(args.file, Some(PathBuf::from("DEF-9x.csv")));
                assert_eq!(args.operator.as_deref(), Some("мтс"));
                assert_eq!(args.suffix.as_deref(), Some("@"));
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_url_and_file_conflict() {
        let result = Cli::try_parse_from(["maskgen", "generate", "-u", "http://x", "-f", "a.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_range_command() {
        let cli = Cli::try_parse_from([
            "maskgen", "--format", "json", "range", "1234", "5678", "-p", "+7",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(CliFormat::Json));
        match cli.into_command().unwrap() {
            Command::Range(args) => {
                assert_eq!(args.low, "1234");
                assert_eq!(args.high, "5678");
                assert_eq!(args.prefix.as_deref(), Some("+7"));
            }
            _ => panic!("Expected Range command"),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from(["maskgen", "config", "show", "--no-color", "-vv"]);
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.into_command().unwrap(),
            Command::Config(ConfigArgs {
                action: ConfigAction::Show
            })
        ));
    }

    #[test]
    fn test_global_options_before_subcommand() {
        let argvs: [&[&str]; 4] = [
            &["maskgen", "--format", "json", "range", "1234", "5678"],
            &["maskgen", "--no-color", "config", "show"],
            &["maskgen", "-v", "range", "1", "2"],
            &["maskgen", "--config", "/tmp/maskgen.toml", "config", "init"],
        ];
        for argv in argvs {
            let cli = Cli::try_parse_from(argv)
                .unwrap_or_else(|e| panic!("{:?} rejected: {}", argv, e));
            assert!(cli.into_command().is_ok(), "{:?}", argv);
        }

        let cli = Cli::try_parse_from(["maskgen", "--config", "/tmp/maskgen.toml", "config", "init"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/maskgen.toml")));
        assert!(matches!(
            cli.into_command().unwrap(),
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force: false }
            })
        ));
    }

    #[test]
    fn test_generate_options_with_subcommand_are_rejected() {
        let cli = Cli::try_parse_from(["maskgen", "-p", "8", "range", "1", "2"]).unwrap();
        assert!(matches!(cli.into_command(), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Json.into();
        assert_eq!(format, crate::config::OutputFormat::Json);
    }
}
