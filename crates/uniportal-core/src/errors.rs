//! Cross-cutting error types for the portal.
//!
//! Transport and storage errors live in their own crates; this enum only
//! covers what can be decided without touching the network or the disk.

use thiserror::Error;

/// Message shown when a client-side role check fails.
pub const ACCESS_DENIED: &str = "Access denied";

/// Message shown when an edit form has nothing selected.
pub const SELECT_AT_LEAST_ONE_FIELD: &str = "Please select at least one field to edit";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// One or more required form fields are empty.
    #[error("Please fill in all required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// A field holds a value of the wrong shape (not a number, bad date, ...).
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// Generic validation failure with a user-facing message.
    #[error("{0}")]
    Validation(String),

    /// The stored role is not allowed to perform the operation.
    #[error("{ACCESS_DENIED}")]
    AccessDenied,
}

impl CoreError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_every_field() {
        let err = CoreError::MissingFields {
            fields: vec!["name".into(), "email".into()],
        };
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields: name, email"
        );
    }

    #[test]
    fn access_denied_uses_fixed_text() {
        assert_eq!(CoreError::AccessDenied.to_string(), "Access denied");
    }
}
