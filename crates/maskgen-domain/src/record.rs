//! Range record module - one row of the numbering-plan registry

/// A numbering-plan row as published by the regulator
///
/// All fields are kept as text exactly as read; validating widths and
/// arithmetic is the gatekeeper's job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RangeRecord {
    /// ABC/DEF code (e.g. "916")
    pub code: String,

    /// First subscriber number of the range
    pub from: String,

    /// Last subscriber number of the range
    pub to: String,

    /// Declared number of subscriber numbers in the range
    pub capacity: String,

    /// Operator holding the range
    pub operator: String,

    /// Region the range is assigned to
    pub region: String,
}

impl RangeRecord {
    /// Create a record from its six fields
    pub fn new(
        code: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        capacity: impl Into<String>,
        operator: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            from: from.into(),
            to: to.into(),
            capacity: capacity.into(),
            operator: operator.into(),
            region: region.into(),
        }
    }

    /// The fields in registry column order
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.code,
            &self.from,
            &self.to,
            &self.capacity,
            &self.operator,
            &self.region,
        ]
    }
}
