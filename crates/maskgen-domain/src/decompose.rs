//! Interval decomposition into digit patterns
//!
//! The decomposer turns `[low, high]` into an ordered list of patterns whose
//! denoted sets partition the interval. At every step, in priority order:
//!
//! 1. `low == high`: emit the literal digits.
//! 2. Shared leading digits: peel them off as literals.
//! 3. Trailing positions spanning `0..=9` in both bounds: peel them off as
//!    wildcards.
//! 4. A single remaining position: emit a digit class `[low-high]`.
//! 5. Otherwise split on digit boundaries (see [`split`]).
//!
//! Pending sub-intervals live on an explicit stack rather than the call
//! stack. Children are pushed in reverse so patterns come out in the same
//! order a left-to-right recursion would produce.

use crate::digits::{common_prefix_len, trailing_full_wildcard_len};
use crate::{DecomposeError, DigitString, Interval, Pattern, Token};

/// A pending sub-interval together with the tokens already fixed around it
#[derive(Debug, Clone)]
struct Frame {
    leading: Vec<Token>,
    low: DigitString,
    high: DigitString,
    trailing: Vec<Token>,
}

/// Outcome of processing one frame
enum Step {
    Emit(Pattern),
    Push(Vec<Frame>),
}

impl Frame {
    fn root(interval: &Interval) -> Self {
        Self {
            leading: Vec::new(),
            low: interval.low().clone(),
            high: interval.high().clone(),
            trailing: Vec::new(),
        }
    }

    /// A sibling sub-interval sharing this frame's fixed tokens
    fn child(&self, low: DigitString, high: DigitString) -> Self {
        Self {
            leading: self.leading.clone(),
            low,
            high,
            trailing: self.trailing.clone(),
        }
    }

    fn emit(self, middle: impl IntoIterator<Item = Token>) -> Pattern {
        let mut tokens = self.leading;
        tokens.extend(middle);
        tokens.extend(self.trailing);
        Pattern::new(tokens)
    }
}

/// Decompose an interval into patterns that partition it exactly
///
/// The result is deterministic. It is not guaranteed to be the smallest
/// possible set of patterns.
///
/// # Examples
///
/// ```
/// use maskgen_domain::{decompose, Interval};
///
/// let interval = Interval::parse("1235000", "1236999").unwrap();
/// let patterns = decompose(&interval).unwrap();
/// let rendered: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
/// assert_eq!(rendered, vec!["123[5-6]XXX"]);
/// ```
pub fn decompose(interval: &Interval) -> Result<Vec<Pattern>, DecomposeError> {
    let mut patterns = Vec::new();
    let mut stack = vec![Frame::root(interval)];

    while let Some(frame) = stack.pop() {
        match step(frame)? {
            Step::Emit(pattern) => patterns.push(pattern),
            Step::Push(children) => stack.extend(children.into_iter().rev()),
        }
    }

    debug_assert!(patterns.iter().all(|p| p.width() == interval.width()));
    Ok(patterns)
}

fn step(mut frame: Frame) -> Result<Step, DecomposeError> {
    if frame.low == frame.high {
        let literals: Vec<Token> = frame.low.digits().map(Token::Literal).collect();
        return Ok(Step::Emit(frame.emit(literals)));
    }

    if frame.low.len() != frame.high.len() {
        return Err(DecomposeError::WidthMismatch {
            low: frame.low.to_string(),
            high: frame.high.to_string(),
        });
    }
    let width = frame.low.len();

    let shared = common_prefix_len(&frame.low, &frame.high);
    if shared > 0 {
        frame
            .leading
            .extend(frame.low.head(shared).digits().map(Token::Literal));
        frame.low = frame.low.tail(shared);
        frame.high = frame.high.tail(shared);
        return Ok(Step::Push(vec![frame]));
    }

    let full = trailing_full_wildcard_len(&frame.low, &frame.high);
    if full > 0 {
        let mut trailing = vec![Token::Wildcard; full];
        trailing.append(&mut frame.trailing);
        frame.trailing = trailing;
        frame.low = frame.low.head(width - full);
        frame.high = frame.high.head(width - full);
        return Ok(Step::Push(vec![frame]));
    }

    if width == 1 {
        let class = frame
            .low
            .leading_digit()
            .zip(frame.high.leading_digit())
            .and_then(|(low, high)| Token::class(low, high))
            .ok_or_else(|| DecomposeError::InvertedInterval {
                low: frame.low.to_string(),
                high: frame.high.to_string(),
            })?;
        return Ok(Step::Emit(frame.emit([class])));
    }

    split(&frame).map(Step::Push)
}

/// Split a frame with no shared leading digit and no full trailing range
///
/// An all-zero low bound splits once at the floor of the high bound:
/// `[000, 678]` becomes `[000, 599]` and `[600, 678]`.
///
/// Any other low bound first takes the run up to its ceiling boundary,
/// `[1240, 1299]` out of `[1240, 5678]`. If the value right after that
/// ceiling still starts with the leading digit of either bound, the rest is
/// one sub-interval. Otherwise the rest splits again at the floor of the high
/// bound: `[2000, 4999]` and `[5000, 5678]`.
fn split(frame: &Frame) -> Result<Vec<Frame>, DecomposeError> {
    let (low, high) = (&frame.low, &frame.high);

    if low.is_all_zero() {
        let floor = high.floor_boundary();
        return Ok(vec![
            frame.child(low.clone(), floor.decrement()?),
            frame.child(floor, high.clone()),
        ]);
    }

    // The leading digits differ, so the ceiling of `low` is below `high` and
    // cannot be all nines; `increment` still reports the overflow if it were.
    let ceiling = low.ceil_boundary();
    let next = ceiling.increment()?;
    let mut children = vec![frame.child(low.clone(), ceiling)];

    let lead = next.leading_digit();
    if lead == low.leading_digit() || lead == high.leading_digit() {
        children.push(frame.child(next, high.clone()));
    } else {
        let floor = high.floor_boundary();
        children.push(frame.child(next, floor.decrement()?));
        children.push(frame.child(floor, high.clone()));
    }
    Ok(children)
}
