//! Validation results shared by every form.
//!
//! A `ValidationResult` is built fresh for each submit attempt. Rules are
//! recorded with [`ValidationResult::require`], which keeps going after a
//! failure so that all applicable errors surface together.

use crate::model::FieldId;

pub mod rules;

/// A single failed rule, attached to the field that should display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    field_errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` against `field` unless `ok` holds.
    ///
    /// A field carries at most one error; the first failing rule wins.
    pub fn require(&mut self, ok: bool, field: FieldId, message: &str) -> &mut Self {
        if !ok && self.error_for(field).is_none() {
            self.field_errors.push(FieldError {
                field,
                message: message.to_string(),
            });
        }
        self
    }

    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Errors in the order the rules were evaluated.
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    pub fn error_for(&self, field: FieldId) -> Option<&FieldError> {
        self.field_errors.iter().find(|e| e.field == field)
    }

    pub fn len(&self) -> usize {
        self.field_errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty()
    }
}
