//! Error types for digit arithmetic and interval decomposition

use thiserror::Error;

/// Errors that can occur while building or decomposing an interval
///
/// Any of these is fatal to the row being decomposed and to nothing else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecomposeError {
    /// Input contained something other than decimal digits
    #[error("Malformed digit string: {0:?}")]
    MalformedDigitString(String),

    /// Interval bounds do not have the same number of digits
    #[error("Width mismatch: low bound {low:?} and high bound {high:?} differ in length")]
    WidthMismatch {
        /// Low bound as given
        low: String,
        /// High bound as given
        high: String,
    },

    /// Interval bounds have no digits at all
    #[error("Interval bounds must have at least one digit")]
    EmptyBounds,

    /// Low bound is greater than high bound
    #[error("Inverted interval: {low} is greater than {high}")]
    InvertedInterval {
        /// Low bound as given
        low: String,
        /// High bound as given
        high: String,
    },

    /// Increment carried past the leftmost digit
    #[error("Increment of {0} overflows its width")]
    Overflow(String),

    /// Decrement of an all-zero value
    #[error("Decrement of {0} underflows below zero")]
    Underflow(String),
}
