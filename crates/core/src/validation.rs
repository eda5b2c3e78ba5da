//! Field-level validation primitives shared by every create payload.
//!
//! Validators push [`FieldViolation`]s into a [`Violations`] collector so a
//! form can show every problem at once instead of one per round-trip.

use serde::Serialize;

use crate::error::CoreError;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Accumulates violations for one payload.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    /// Record a "required" violation when `value` is empty after trimming.
    ///
    /// Returns `true` when the value is present so callers can chain further
    /// checks only on non-empty input.
    pub fn require(&mut self, field: &'static str, label: &str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.push(field, format!("{label} is required"));
            false
        } else {
            true
        }
    }

    /// Convert into `Ok(())` when nothing was recorded, otherwise
    /// [`CoreError::InvalidFields`].
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(self.0))
        }
    }
}

/// Treat an optional string that is blank after trimming as absent.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn require_flags_whitespace_only() {
        let mut v = Violations::new();
        assert!(!v.require("name", "Name", "   "));
        assert!(v.require("description", "Description", "x"));
        assert_matches!(v.into_result(), Err(CoreError::InvalidFields(fields)) => {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].field, "name");
            assert_eq!(fields[0].message, "Name is required");
        });
    }

    #[test]
    fn empty_collector_is_ok() {
        assert!(Violations::new().into_result().is_ok());
    }

    #[test]
    fn non_blank_drops_empty_strings() {
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(Some("a")), Some("a"));
        assert_eq!(non_blank(None), None);
    }
}
