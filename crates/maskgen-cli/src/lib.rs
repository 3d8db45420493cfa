//! maskgen CLI library.
//!
//! Everything behind the `maskgen` binary: argument parsing, the layered TOML
//! configuration, the generate/range/config commands and the text and JSON
//! formatters. Commands write to any `io::Write`, so they run in tests
//! without a terminal.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
