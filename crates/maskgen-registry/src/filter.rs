//! Row selection and grouping

use maskgen_domain::RangeRecord;
use tracing::debug;

/// Case-insensitive substring filter on region and operator
///
/// Registry spellings are inconsistent ("г. Москва", "Москва и Московская
/// область"), so short fragments work best.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Fragment the region must contain
    pub region: Option<String>,

    /// Fragment the operator must contain
    pub operator: Option<String>,
}

impl RecordFilter {
    /// Create a filter that keeps every row
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the region to contain `fragment`
    pub fn with_region(mut self, fragment: impl Into<String>) -> Self {
        self.region = Some(fragment.into());
        self
    }

    /// Require the operator to contain `fragment`
    pub fn with_operator(mut self, fragment: impl Into<String>) -> Self {
        self.operator = Some(fragment.into());
        self
    }

    /// Whether the filter keeps every row
    pub fn is_empty(&self) -> bool {
        self.region.as_deref().map_or(true, str::is_empty)
            && self.operator.as_deref().map_or(true, str::is_empty)
    }

    /// Whether `record` passes the filter
    pub fn matches(&self, record: &RangeRecord) -> bool {
        let region_ok = self
            .region
            .as_deref()
            .map_or(true, |f| contains_ignore_case(&record.region, f));
        let operator_ok = self
            .operator
            .as_deref()
            .map_or(true, |f| contains_ignore_case(&record.operator, f));
        region_ok && operator_ok
    }

    /// Keep only the matching rows, preserving order
    pub fn apply(&self, records: Vec<RangeRecord>) -> Vec<RangeRecord> {
        if self.is_empty() {
            return records;
        }
        let total = records.len();
        let kept: Vec<RangeRecord> = records.into_iter().filter(|r| self.matches(r)).collect();
        debug!(total, kept = kept.len(), "Filtered registry rows");
        kept
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Order rows by operator so each operator's rows are contiguous
///
/// The sort is stable: rows of one operator keep their registry order.
pub fn group_by_operator(records: &mut [RangeRecord]) {
    records.sort_by(|a, b| a.operator.cmp(&b.operator));
}
