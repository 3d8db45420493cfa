//! Digit string module - fixed-width decimal arithmetic

use crate::DecomposeError;
use std::fmt;
use std::str::FromStr;

/// A fixed-width string of decimal digits
///
/// Leading zeros are significant: `"0042"` and `"42"` are different values
/// of different widths. Arithmetic never changes the width; truncation only
/// happens through [`DigitString::head`] and [`DigitString::tail`].
///
/// The empty digit string is valid. It shows up once decomposition has
/// consumed every position of an interval.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    /// Parse a digit string, rejecting anything that is not `0`-`9`
    ///
    /// # Examples
    ///
    /// ```
    /// use maskgen_domain::DigitString;
    ///
    /// let s = DigitString::parse("0042").unwrap();
    /// assert_eq!(s.len(), 4);
    /// assert!(DigitString::parse("4a2").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DecomposeError> {
        if s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(DecomposeError::MalformedDigitString(s.to_string()))
        }
    }

    /// Build from bytes already known to be ASCII digits
    pub(crate) fn from_ascii_digits(bytes: &[u8]) -> Self {
        Self(bytes.iter().map(|&b| b as char).collect())
    }

    /// The digits as text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digit positions
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no digit positions
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Digit value at `index`, counted from the most significant position
    pub fn digit(&self, index: usize) -> Option<u8> {
        self.0.as_bytes().get(index).map(|b| b - b'0')
    }

    /// Iterate over digit values, most significant first
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// The most significant digit
    pub fn leading_digit(&self) -> Option<u8> {
        self.digit(0)
    }

    /// Whether every digit is zero
    pub fn is_all_zero(&self) -> bool {
        self.0.bytes().all(|b| b == b'0')
    }

    /// The first `len` digits
    pub fn head(&self, len: usize) -> Self {
        Self(self.0[..len.min(self.len())].to_string())
    }

    /// Everything from position `from` onward
    pub fn tail(&self, from: usize) -> Self {
        Self(self.0[from.min(self.len())..].to_string())
    }

    /// Numeric value, or `None` when it does not fit in a `u128`
    pub fn value(&self) -> Option<u128> {
        self.digits().try_fold(0u128, |acc, d| {
            acc.checked_mul(10)?.checked_add(u128::from(d))
        })
    }

    /// Add one, keeping the width
    ///
    /// # Errors
    ///
    /// Returns [`DecomposeError::Overflow`] when the value is all nines.
    pub fn increment(&self) -> Result<Self, DecomposeError> {
        let mut bytes = self.0.as_bytes().to_vec();
        for b in bytes.iter_mut().rev() {
            if *b == b'9' {
                *b = b'0';
            } else {
                *b += 1;
                return Ok(Self::from_ascii_digits(&bytes));
            }
        }
        Err(DecomposeError::Overflow(self.0.clone()))
    }

    /// Subtract one, keeping the width
    ///
    /// # Errors
    ///
    /// Returns [`DecomposeError::Underflow`] when the value is all zeros.
    pub fn decrement(&self) -> Result<Self, DecomposeError> {
        let mut bytes = self.0.as_bytes().to_vec();
        for b in bytes.iter_mut().rev() {
            if *b == b'0' {
                *b = b'9';
            } else {
                *b -= 1;
                return Ok(Self::from_ascii_digits(&bytes));
            }
        }
        Err(DecomposeError::Underflow(self.0.clone()))
    }

    /// Keep the leading digit and zero the rest: `"5678"` becomes `"5000"`
    pub fn floor_boundary(&self) -> Self {
        match self.0.chars().next() {
            Some(lead) => {
                let mut s = String::with_capacity(self.len());
                s.push(lead);
                s.extend(std::iter::repeat('0').take(self.len() - 1));
                Self(s)
            }
            None => self.clone(),
        }
    }

    /// Round up past the trailing zero run
    ///
    /// Let `r` be the number of trailing zeros, not counting the leading
    /// position. The lowest `min(r + 1, len - 1)` digits become nines, so
    /// `"1240"` becomes `"1299"` and `"1300"` becomes `"1999"`. The leading
    /// digit is never touched.
    pub fn ceil_boundary(&self) -> Self {
        let len = self.len();
        if len < 2 {
            return self.clone();
        }
        let zeros = self.0.as_bytes()[1..]
            .iter()
            .rev()
            .take_while(|&&b| b == b'0')
            .count();
        let rounded = (zeros + 1).min(len - 1);

        let mut s = String::with_capacity(len);
        s.push_str(&self.0[..len - rounded]);
        s.extend(std::iter::repeat('9').take(rounded));
        Self(s)
    }

    /// Digits in reverse order
    pub fn reversed(&self) -> Self {
        Self(self.0.chars().rev().collect())
    }
}

/// Length of the longest identical leading run of two digit strings
pub fn common_prefix_len(a: &DigitString, b: &DigitString) -> usize {
    a.0.bytes()
        .zip(b.0.bytes())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Number of trailing positions where `high - low == 9`
///
/// Those positions range over all ten digits independently inside
/// `[low, high]` and collapse into wildcards. Both strings must have the same
/// width.
pub fn trailing_full_wildcard_len(low: &DigitString, high: &DigitString) -> usize {
    low.digits()
        .rev()
        .zip(high.digits().rev())
        .take_while(|&(l, h)| l == 0 && h == 9)
        .count()
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DigitString {
    type Err = DecomposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
