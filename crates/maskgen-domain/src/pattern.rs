//! Pattern module - a fixed-width sequence of tokens

use crate::token::DEFAULT_WILDCARD;
use crate::{DigitString, Token};
use std::fmt;

/// An ordered sequence of tokens denoting a set of digit strings
///
/// A pattern of width `L` matches exactly the digit strings of width `L`
/// whose every digit is accepted by the token at the same position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    /// Create a pattern from its tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// A pattern matching exactly one value
    pub fn literal(value: &DigitString) -> Self {
        Self::new(value.digits().map(Token::Literal).collect())
    }

    /// The tokens, most significant position first
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of digit positions
    pub fn width(&self) -> usize {
        self.tokens.len()
    }

    /// Number of distinct digit strings matched (saturating)
    pub fn cardinality(&self) -> u128 {
        self.tokens
            .iter()
            .fold(1u128, |acc, t| acc.saturating_mul(u128::from(t.cardinality())))
    }

    /// Whether `value` is one of the digit strings this pattern denotes
    pub fn matches(&self, value: &DigitString) -> bool {
        value.len() == self.width()
            && self
                .tokens
                .iter()
                .zip(value.digits())
                .all(|(token, digit)| token.matches(digit))
    }

    /// Every digit string matched, in ascending order
    ///
    /// The result has [`Pattern::cardinality`] entries, so this is only
    /// sensible for narrow patterns.
    pub fn expand(&self) -> Vec<DigitString> {
        let mut prefixes: Vec<Vec<u8>> = vec![Vec::with_capacity(self.width())];
        for token in &self.tokens {
            prefixes = prefixes
                .into_iter()
                .flat_map(|prefix| {
                    token.choices().map(move |d| {
                        let mut next = prefix.clone();
                        next.push(b'0' + d);
                        next
                    })
                })
                .collect();
        }
        prefixes
            .iter()
            .map(|bytes| DigitString::from_ascii_digits(bytes))
            .collect()
    }

    /// Textual form with the given wildcard glyph
    pub fn render(&self, wildcard: char) -> String {
        let mut s = String::with_capacity(self.width());
        for token in &self.tokens {
            token.write_to(&mut s, wildcard);
        }
        s
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_WILDCARD))
    }
}
