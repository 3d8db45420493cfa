//! Gatekeeper error types

use crate::RejectionReason;
use maskgen_domain::DecomposeError;
use thiserror::Error;

/// Errors that can occur while admitting a row
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// The row failed one or more validation rules
    #[error("Row rejected: {}", join_reasons(.0))]
    Rejected(Vec<RejectionReason>),

    /// The bounds passed validation but do not form an interval
    #[error("Invalid interval: {0}")]
    Interval(#[from] DecomposeError),
}

fn join_reasons(reasons: &[RejectionReason]) -> String {
    reasons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
