//! Validation utilities.

use crate::StarbaseError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `ConstraintViolation` on failure.
    fn validate_constraints(&self) -> Result<(), StarbaseError> {
        self.validate().map_err(validation_errors_to_starbase_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Folds `validator::ValidationErrors` into one `ConstraintViolation`.
///
/// Fields are sorted so the message is stable across runs.
#[must_use]
pub fn validation_errors_to_starbase_error(errors: ValidationErrors) -> StarbaseError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let detail = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                format!("{}: {}", field, detail)
            })
        })
        .collect();
    messages.sort();

    StarbaseError::ConstraintViolation(messages.join("; "))
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, max = 4))]
        name: String,
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Kirk").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_validate_constraints_maps_to_constraint_violation() {
        let probe = Probe {
            name: "too long".to_string(),
        };
        let err = probe.validate_constraints().unwrap_err();
        assert!(matches!(err, StarbaseError::ConstraintViolation(ref m) if m.starts_with("name: length")));
    }

    #[test]
    fn test_validate_constraints_ok() {
        let probe = Probe {
            name: "Data".to_string(),
        };
        assert!(probe.validate_constraints().is_ok());
    }
}
