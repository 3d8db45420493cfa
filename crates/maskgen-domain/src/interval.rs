//! Interval module - a closed range of fixed-width digit strings

use crate::{DecomposeError, DigitString, Pattern};
use std::fmt;

/// A closed interval `[low, high]` of equal-width digit strings
///
/// Construction guarantees a non-zero width shared by both bounds and
/// `low <= high`. For equal widths the textual order of the bounds is their
/// numeric order, so no integer conversion is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    low: DigitString,
    high: DigitString,
}

impl Interval {
    /// Create an interval from two digit strings
    ///
    /// # Errors
    ///
    /// - [`DecomposeError::WidthMismatch`] when the bounds differ in width
    /// - [`DecomposeError::EmptyBounds`] when the bounds have no digits
    /// - [`DecomposeError::InvertedInterval`] when `low > high`
    pub fn new(low: DigitString, high: DigitString) -> Result<Self, DecomposeError> {
        if low.len() != high.len() {
            return Err(DecomposeError::WidthMismatch {
                low: low.to_string(),
                high: high.to_string(),
            });
        }
        if low.is_empty() {
            return Err(DecomposeError::EmptyBounds);
        }
        if low.as_str() > high.as_str() {
            return Err(DecomposeError::InvertedInterval {
                low: low.to_string(),
                high: high.to_string(),
            });
        }
        Ok(Self { low, high })
    }

    /// Parse both bounds and create an interval
    ///
    /// # Examples
    ///
    /// ```
    /// use maskgen_domain::Interval;
    ///
    /// let interval = Interval::parse("1200000", "1299999").unwrap();
    /// assert_eq!(interval.width(), 7);
    /// assert!(Interval::parse("12", "123").is_err());
    /// ```
    pub fn parse(low: &str, high: &str) -> Result<Self, DecomposeError> {
        Self::new(DigitString::parse(low)?, DigitString::parse(high)?)
    }

    /// Lower bound
    pub fn low(&self) -> &DigitString {
        &self.low
    }

    /// Upper bound
    pub fn high(&self) -> &DigitString {
        &self.high
    }

    /// Number of digit positions
    pub fn width(&self) -> usize {
        self.low.len()
    }

    /// Number of values in the interval, or `None` when too wide for `u128`
    pub fn count(&self) -> Option<u128> {
        self.high.value()?.checked_sub(self.low.value()?)?.checked_add(1)
    }

    /// Whether `value` lies inside the interval
    pub fn contains(&self, value: &DigitString) -> bool {
        value.len() == self.width()
            && self.low.as_str() <= value.as_str()
            && value.as_str() <= self.high.as_str()
    }

    /// Decompose into patterns that partition the interval
    pub fn decompose(&self) -> Result<Vec<Pattern>, DecomposeError> {
        crate::decompose::decompose(self)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
