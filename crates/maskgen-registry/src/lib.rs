//! maskgen Registry
//!
//! Loads the numbering-plan registry published by the regulator and turns it
//! into [`RangeRecord`]s.
//!
//! # Architecture
//!
//! ```text
//! URL/file → RegistryClient → decode (Windows-1251) → fix separators → CSV → RecordFilter → records
//! ```
//!
//! # Key Features
//!
//! - **Download**: async HTTP with timeout and exponential-backoff retries
//! - **Decoding**: any WHATWG encoding label, Windows-1251 by default
//! - **Dialect fix-up**: stray `;` separators folded back into the region column
//! - **Filtering**: case-insensitive region/operator fragments
//! - **Grouping**: stable ordering by operator
//!
//! # Example Usage
//!
//! ```no_run
//! use maskgen_registry::{load_records, RecordFilter, RegistryClient, RegistryConfig, Source};
//!
//! # async fn example() -> Result<(), maskgen_registry::RegistryError> {
//! let client = RegistryClient::new(RegistryConfig::default())?;
//! let records = load_records(&client, &Source::Url(client.config().url.clone())).await?;
//! let moscow = RecordFilter::new().with_region("моск").apply(records);
//! println!("{} rows", moscow.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod config;
mod encoding;
mod error;
mod filter;
mod parser;

pub use client::{RegistryClient, Source, DEFAULT_BACKOFF};
pub use config::{
    RegistryConfig, DEFAULT_ENCODING, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS, DEFAULT_URL,
    RECORD_FIELDS,
};
pub use encoding::decode;
pub use error::RegistryError;
pub use filter::{group_by_operator, RecordFilter};
pub use parser::{fix_separators, parse_records};

use maskgen_domain::RangeRecord;
use tracing::info;

/// Load, decode and parse the registry from `source`
pub async fn load_records(
    client: &RegistryClient,
    source: &Source,
) -> Result<Vec<RangeRecord>, RegistryError> {
    let text = client.load(source).await?;
    let records = parse_records(&text, client.config().field_count)?;
    info!(count = records.len(), "Loaded registry rows");
    Ok(records)
}
