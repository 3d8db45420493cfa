//! Token module - one digit position of a pattern

use std::fmt;
use std::ops::RangeInclusive;

/// Wildcard glyph used when no other is configured
pub const DEFAULT_WILDCARD: char = 'X';

/// A single digit position of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Exactly this digit
    Literal(u8),

    /// Any digit 0-9
    Wildcard,

    /// Any digit in `[low, high]`, with `low < high`
    DigitClass(u8, u8),
}

impl Token {
    /// Build a digit class, or `None` unless `low < high <= 9`
    pub fn class(low: u8, high: u8) -> Option<Self> {
        (low < high && high <= 9).then_some(Token::DigitClass(low, high))
    }

    /// The digits this token accepts
    pub fn choices(&self) -> RangeInclusive<u8> {
        match *self {
            Token::Literal(d) => d..=d,
            Token::Wildcard => 0..=9,
            Token::DigitClass(low, high) => low..=high,
        }
    }

    /// Whether `digit` is accepted at this position
    pub fn matches(&self, digit: u8) -> bool {
        self.choices().contains(&digit)
    }

    /// Number of digits accepted at this position
    pub fn cardinality(&self) -> u8 {
        let choices = self.choices();
        choices.end() - choices.start() + 1
    }

    /// Append the textual form, using `wildcard` as the wildcard glyph
    pub fn write_to(&self, out: &mut String, wildcard: char) {
        match *self {
            Token::Literal(d) => out.push(char::from(b'0' + d)),
            Token::Wildcard => out.push(wildcard),
            Token::DigitClass(low, high) => {
                out.push('[');
                out.push(char::from(b'0' + low));
                out.push('-');
                out.push(char::from(b'0' + high));
                out.push(']');
            }
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::new();
        self.write_to(&mut s, DEFAULT_WILDCARD);
        f.write_str(&s)
    }
}
