//! Command implementations.

pub mod config;
pub mod generate;
pub mod range;

pub use self::config::execute_config;
pub use self::generate::{compile_records, execute_generate, GenerateOptions, GenerateSummary};
pub use self::range::execute_range;
