//! Input policy for numeric values
//!
//! Dimension values and numeric machine information are stored as the text
//! the user typed, trimmed. Before storing, the text must parse as a finite
//! decimal number. Negative numbers are rejected unless the policy allows
//! them, and an optional maximum bounds the value from above.

use super::catalog::{FieldKind, MachineInfoFieldDefinition};
use crate::error::InputError;
use serde::{Deserialize, Serialize};

/// Validation rules applied to numeric input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputPolicy {
    /// Accept values below zero
    pub allow_negative: bool,
    /// Inclusive upper bound
    pub max_value: Option<f64>,
}

impl InputPolicy {
    /// Validate a dimension entry
    ///
    /// Returns `Ok(None)` for blank input (the dimension becomes unset) and
    /// `Ok(Some(trimmed))` for an accepted number.
    pub fn normalize_dimension(&self, id: &str, raw: &str) -> Result<Option<String>, InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        self.check_number(id, trimmed)?;
        Ok(Some(trimmed.to_string()))
    }

    /// Validate a machine information entry against its field kind
    ///
    /// Blank input is always accepted; whether it satisfies a required field
    /// is decided by the completeness check, not here.
    pub fn normalize_field(
        &self,
        field: &MachineInfoFieldDefinition,
        raw: &str,
    ) -> Result<String, InputError> {
        let trimmed = raw.trim();
        match field.kind {
            FieldKind::Text => Ok(raw.to_string()),
            _ if trimmed.is_empty() => Ok(String::new()),
            FieldKind::Number => {
                self.check_number(&field.id, trimmed)?;
                Ok(trimmed.to_string())
            }
            FieldKind::Select => field
                .options
                .iter()
                .find(|o| o.as_str() == trimmed)
                .cloned()
                .ok_or_else(|| InputError::NotAnOption {
                    field: field.id.clone(),
                    value: trimmed.to_string(),
                }),
        }
    }

    fn check_number(&self, id: &str, text: &str) -> Result<f64, InputError> {
        let value = text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| InputError::NotANumber {
                field: id.to_string(),
                value: text.to_string(),
            })?;

        if value < 0.0 && !self.allow_negative {
            return Err(InputError::Negative {
                field: id.to_string(),
                value: text.to_string(),
            });
        }

        if let Some(max) = self.max_value {
            if value > max {
                return Err(InputError::AboveMaximum {
                    field: id.to_string(),
                    value: text.to_string(),
                    max,
                });
            }
        }

        Ok(value)
    }
}
