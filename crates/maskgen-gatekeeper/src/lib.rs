//! maskgen Gatekeeper
//!
//! Checks registry rows before they reach the decomposer.
//!
//! The Gatekeeper provides:
//! - Field width validation (code, first and last number)
//! - Numeric field validation
//! - Capacity consistency (`to - from + 1 == capacity`)
//! - Admission: a validated row becomes an [`Interval`](maskgen_domain::Interval)
//!
//! A rejected row is meant to be reported and skipped; nothing here aborts a
//! whole run.
//!
//! # Examples
//!
//! ```
//! use maskgen_domain::RangeRecord;
//! use maskgen_gatekeeper::{Gatekeeper, ValidationConfig, ValidationStatus};
//!
//! let gatekeeper = Gatekeeper::new(ValidationConfig::default());
//! let record = RangeRecord::new("916", "0000000", "0999999", "1000000", "MTS", "Moscow");
//!
//! assert_eq!(gatekeeper.validate(&record).status, ValidationStatus::Accepted);
//! let interval = gatekeeper.admit(&record).unwrap();
//! assert_eq!(interval.width(), 7);
//! ```

#![warn(missing_docs)]

mod validator;
mod error;
mod config;

pub use validator::{Gatekeeper, RecordField, RejectionReason, ValidationResult, ValidationStatus};
pub use error::GatekeeperError;
pub use config::ValidationConfig;
