//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use maskgen_domain::RangeRecord;
use maskgen_gatekeeper::{GatekeeperError, RejectionReason};
use serde::Serialize;

/// One compiled registry row in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskRow {
    /// ABC/DEF code
    pub code: String,
    /// First number of the range
    pub from: String,
    /// Last number of the range
    pub to: String,
    /// Declared count of numbers
    pub capacity: String,
    /// Operator name
    pub operator: String,
    /// Region name
    pub region: String,
    /// Rendered masks, in decomposition order
    pub masks: Vec<String>,
}

impl MaskRow {
    /// Pair a record with its masks.
    pub fn new(record: &RangeRecord, masks: Vec<String>) -> Self {
        Self {
            code: record.code.clone(),
            from: record.from.clone(),
            to: record.to.clone(),
            capacity: record.capacity.clone(),
            operator: record.operator.clone(),
            region: record.region.clone(),
            masks,
        }
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Comment line describing a registry row.
    pub fn comment(&self, record: &RangeRecord) -> String {
        format!("; {}", record.fields().join(", "))
    }

    /// Header line opening an operator group.
    pub fn group_header(&self, operator: &str) -> String {
        format!("; {}", operator)
    }

    /// Report for a skipped row.
    ///
    /// A capacity mismatch reads `wrong interval: from <from> to <to> !=
    /// <capacity>`, with any other problems in parentheses. Rows whose
    /// capacity is consistent are reported by their remaining reasons only.
    pub fn rejection(&self, record: &RangeRecord, error: &GatekeeperError) -> String {
        let message = match error {
            GatekeeperError::Rejected(reasons) => {
                let (capacity, other): (Vec<&RejectionReason>, Vec<&RejectionReason>) = reasons
                    .iter()
                    .partition(|r| matches!(r, RejectionReason::RangeInconsistent { .. }));
                let other = other
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");

                if capacity.is_empty() {
                    format!("invalid row {}: {}", row_label(record), other)
                } else if other.is_empty() {
                    wrong_interval(record)
                } else {
                    format!("{} ({})", wrong_interval(record), other)
                }
            }
            GatekeeperError::Interval(e) => format!("invalid row {}: {}", row_label(record), e),
        };
        self.colorize(&message, "yellow")
    }

    /// Format compiled rows as a JSON array.
    pub fn mask_rows_json(&self, rows: &[MaskRow]) -> Result<String> {
        Ok(serde_json::to_string_pretty(rows)?)
    }

    /// Format the masks of a single interval as a JSON object.
    pub fn range_json(&self, low: &str, high: &str, masks: &[String]) -> Result<String> {
        let value = serde_json::json!({
            "from": low,
            "to": high,
            "masks": masks,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn wrong_interval(record: &RangeRecord) -> String {
    format!(
        "wrong interval: from {} to {} != {}",
        record.from, record.to, record.capacity
    )
}

fn row_label(record: &RangeRecord) -> String {
    format!("{} {}..{}", record.code, record.from, record.to)
}
