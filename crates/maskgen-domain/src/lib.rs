//! maskgen Domain Layer
//!
//! The range-to-pattern compiler and the value types around it. Given a
//! closed interval of fixed-width decimal digit strings, it produces an
//! ordered set of dial-plan masks that together match exactly the integers in
//! the interval, with no overlap.
//!
//! ## Key Concepts
//!
//! - **DigitString**: fixed-width decimal digits, leading zeros preserved
//! - **Interval**: a validated `[low, high]` pair of equal width
//! - **Token**: literal digit, wildcard, or single-position digit class
//! - **Pattern**: a sequence of tokens, one per digit position
//! - **MaskRenderer**: wraps patterns in a literal prefix and suffix
//! - **RangeRecord**: one row of the numbering-plan registry
//!
//! ## Architecture
//!
//! This crate is pure: no I/O beyond writing rendered lines to a caller's
//! writer, no logging, no global state. Ingestion, validation and the CLI
//! live in other crates.
//!
//! ```
//! use maskgen_domain::{Interval, MaskRenderer};
//!
//! let interval = Interval::parse("00", "45").unwrap();
//! let masks = MaskRenderer::new("7916", "").render_all(&interval.decompose().unwrap());
//! assert_eq!(masks, vec!["7916[0-3]X", "79164[0-5]"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decompose;
pub mod digits;
pub mod error;
pub mod interval;
pub mod pattern;
pub mod record;
pub mod render;
pub mod token;

// Re-exports for convenience
pub use decompose::decompose;
pub use digits::{common_prefix_len, trailing_full_wildcard_len, DigitString};
pub use error::DecomposeError;
pub use interval::Interval;
pub use pattern::Pattern;
pub use record::RangeRecord;
pub use render::MaskRenderer;
pub use token::{Token, DEFAULT_WILDCARD};
