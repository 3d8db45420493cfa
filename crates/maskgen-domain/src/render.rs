//! Mask rendering - patterns wrapped in literal prefix and suffix

use crate::token::DEFAULT_WILDCARD;
use crate::Pattern;
use std::io::{self, Write};

/// Renders patterns as dial-plan masks
///
/// A mask is `prefix ++ tokens ++ suffix`. The prefix and suffix are copied
/// verbatim; they are not digit positions and carry no pattern meaning.
///
/// # Examples
///
/// ```
/// use maskgen_domain::{Interval, MaskRenderer};
///
/// let patterns = Interval::parse("1200000", "1299999").unwrap().decompose().unwrap();
/// let renderer = MaskRenderer::new("8916", "@trunk");
/// assert_eq!(renderer.render_all(&patterns), vec!["891612XXXXX@trunk"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskRenderer {
    prefix: String,
    suffix: String,
    wildcard: char,
}

impl MaskRenderer {
    /// Create a renderer with the default wildcard glyph
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            wildcard: DEFAULT_WILDCARD,
        }
    }

    /// Use a different wildcard glyph
    pub fn with_wildcard(mut self, wildcard: char) -> Self {
        self.wildcard = wildcard;
        self
    }

    /// Render a single pattern
    pub fn render(&self, pattern: &Pattern) -> String {
        let mut s = String::with_capacity(self.prefix.len() + pattern.width() + self.suffix.len());
        s.push_str(&self.prefix);
        s.push_str(&pattern.render(self.wildcard));
        s.push_str(&self.suffix);
        s
    }

    /// Render every pattern, keeping order
    pub fn render_all(&self, patterns: &[Pattern]) -> Vec<String> {
        patterns.iter().map(|p| self.render(p)).collect()
    }

    /// Write one line per pattern
    pub fn write_all<W: Write>(&self, out: &mut W, patterns: &[Pattern]) -> io::Result<()> {
        for pattern in patterns {
            writeln!(out, "{}", self.render(pattern))?;
        }
        Ok(())
    }
}

impl Default for MaskRenderer {
    fn default() -> Self {
        Self::new("", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Interval;

    fn patterns(low: &str, high: &str) -> Vec<Pattern> {
        Interval::parse(low, high).unwrap().decompose().unwrap()
    }

    #[test]
    fn test_default_renderer_is_bare() {
        let renderer = MaskRenderer::default();
        assert_eq!(renderer.render_all(&patterns("00", "45")), vec!["[0-3]X", "4[0-5]"]);
    }

    #[test]
    fn test_prefix_and_suffix() {
        let renderer = MaskRenderer::new("+7916", ";");
        assert_eq!(
            renderer.render_all(&patterns("00", "45")),
            vec!["+7916[0-3]X;", "+79164[0-5];"]
        );
    }

    #[test]
    fn test_custom_wildcard() {
        let renderer = MaskRenderer::default().with_wildcard('.');
        assert_eq!(renderer.render_all(&patterns("1000", "1999")), vec!["1..."]);
    }

    #[test]
    fn test_write_all_one_line_per_pattern() {
        let renderer = MaskRenderer::new("9", "");
        let mut out = Vec::new();
        renderer.write_all(&mut out, &patterns("19", "20")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "919\n920\n");
    }
}
