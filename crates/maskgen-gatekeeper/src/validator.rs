//! Row validation logic

use crate::{GatekeeperError, ValidationConfig};
use maskgen_domain::{Interval, RangeRecord};
use std::fmt;

/// Result of row validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether the row passed validation
    pub status: ValidationStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,
}

impl ValidationResult {
    /// Whether the row was accepted
    pub fn is_accepted(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Row accepted
    Accepted,

    /// Row rejected
    Rejected,
}

/// Numeric fields of a registry row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    /// ABC/DEF code
    Code,
    /// First number of the range
    From,
    /// Last number of the range
    To,
    /// Declared capacity
    Capacity,
}

impl RecordField {
    /// Field name as shown in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::Code => "code",
            RecordField::From => "from",
            RecordField::To => "to",
            RecordField::Capacity => "capacity",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// A numeric field is empty or contains non-digits
    MalformedField {
        /// Offending field
        field: RecordField,
        /// Value as read
        value: String,
    },

    /// A field does not have its mandated width
    WidthMismatch {
        /// Offending field
        field: RecordField,
        /// Required width
        expected: usize,
        /// Actual width
        actual: usize,
    },

    /// `to - from + 1` differs from the declared capacity
    RangeInconsistent {
        /// First number
        from: u64,
        /// Last number
        to: u64,
        /// Declared capacity
        capacity: u64,
    },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::MalformedField { field, value } => {
                write!(f, "{} {:?} is not a decimal number", field, value)
            }
            RejectionReason::WidthMismatch {
                field,
                expected,
                actual,
            } => write!(f, "{} has {} digits, expected {}", field, actual, expected),
            RejectionReason::RangeInconsistent { from, to, capacity } => {
                write!(f, "from {} to {} != {}", from, to, capacity)
            }
        }
    }
}

/// The Gatekeeper validates rows before decomposition
#[derive(Debug, Clone)]
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Validate a row against the configured rules
    ///
    /// Every failing rule contributes a reason, so a report shows all
    /// problems with the row at once.
    pub fn validate(&self, record: &RangeRecord) -> ValidationResult {
        let mut reasons = Vec::new();

        // 1. Numeric fields
        let code = parse_field(RecordField::Code, &record.code, &mut reasons);
        let from = parse_field(RecordField::From, &record.from, &mut reasons);
        let to = parse_field(RecordField::To, &record.to, &mut reasons);
        let capacity = parse_field(RecordField::Capacity, &record.capacity, &mut reasons);

        // 2. Capacity consistency
        if self.config.check_capacity {
            if let (Some(from), Some(to), Some(capacity)) = (from, to, capacity) {
                if i128::from(to) - i128::from(from) + 1 != i128::from(capacity) {
                    reasons.push(RejectionReason::RangeInconsistent { from, to, capacity });
                }
            }
        }

        // 3. Field widths
        if self.config.check_widths {
            let widths = [
                (RecordField::Code, &record.code, self.config.code_width, code),
                (RecordField::From, &record.from, self.config.number_width, from),
                (RecordField::To, &record.to, self.config.number_width, to),
            ];
            for (field, value, expected, parsed) in widths {
                // A malformed field has already been reported
                if parsed.is_none() {
                    continue;
                }
                let actual = value.chars().count();
                if actual != expected {
                    reasons.push(RejectionReason::WidthMismatch {
                        field,
                        expected,
                        actual,
                    });
                }
            }
        }

        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };

        ValidationResult { status, reasons }
    }

    /// Validate a row and turn its bounds into an interval
    ///
    /// # Errors
    ///
    /// - [`GatekeeperError::Rejected`] when any validation rule fails
    /// - [`GatekeeperError::Interval`] when the bounds cannot form an
    ///   interval (only possible with width checks disabled)
    pub fn admit(&self, record: &RangeRecord) -> Result<Interval, GatekeeperError> {
        let result = self.validate(record);
        if !result.is_accepted() {
            return Err(GatekeeperError::Rejected(result.reasons));
        }
        Ok(Interval::parse(&record.from, &record.to)?)
    }
}

/// Parse a field made only of ASCII digits
fn parse_field(field: RecordField, value: &str, reasons: &mut Vec<RejectionReason>) -> Option<u64> {
    let parsed = if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        value.parse::<u64>().ok()
    } else {
        None
    };
    if parsed.is_none() {
        reasons.push(RejectionReason::MalformedField {
            field,
            value: value.to_string(),
        });
    }
    parsed
}
