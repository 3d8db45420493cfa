//! Gatekeeper configuration

use serde::{Deserialize, Serialize};

/// Configuration for row validation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Required width of the ABC/DEF code field
    pub code_width: usize,

    /// Required width of the first and last number fields
    pub number_width: usize,

    /// Enable field width checking
    pub check_widths: bool,

    /// Enable capacity consistency checking
    pub check_capacity: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            code_width: 3,
            number_width: 7,
            check_widths: true,
            check_capacity: true,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (numeric checks only)
    ///
    /// Rows of any width are accepted as long as both bounds share it; the
    /// interval itself still rejects mismatched bounds.
    pub fn permissive() -> Self {
        Self {
            check_widths: false,
            check_capacity: false,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.check_widths && self.code_width == 0 {
            return Err("code_width must be greater than 0".to_string());
        }
        if self.check_widths && self.number_width == 0 {
            return Err("number_width must be greater than 0".to_string());
        }
        Ok(())
    }
}
