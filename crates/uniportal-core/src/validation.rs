//! Client-side checks that run before any request leaves the machine.
//!
//! These mirror what a browser form enforces through `required`,
//! `type=number` and `type=date`: presence and shape, never business rules.

use chrono::NaiveDate;

use crate::errors::CoreError;

/// Fail with every empty field named, in the order given.
///
/// Whitespace-only values count as empty.
pub fn require_fields(fields: &[(&str, &str)]) -> Result<(), CoreError> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| (*name).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::MissingFields { fields: missing })
    }
}

/// Same as [`require_fields`] for optional values; `None` is empty.
pub fn require_present(fields: &[(&str, Option<&str>)]) -> Result<(), CoreError> {
    let flattened: Vec<(&str, &str)> = fields
        .iter()
        .map(|(name, value)| (*name, value.unwrap_or("")))
        .collect();
    require_fields(&flattened)
}

pub fn parse_number(field: &str, raw: &str) -> Result<f64, CoreError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| CoreError::invalid(field, format!("'{raw}' is not a number")))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::invalid(field, "must be a finite number"))
    }
}

/// Dates are exchanged as `YYYY-MM-DD`, the format of an HTML date input.
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::invalid(field, format!("'{raw}' is not a YYYY-MM-DD date")))
}

/// Check that `start` is not after `end`.
pub fn date_range(start: &str, end: &str) -> Result<(), CoreError> {
    let start_date = parse_date("start_date", start)?;
    let end_date = parse_date("end_date", end)?;
    if start_date > end_date {
        return Err(CoreError::Validation(
            "End date must be on or after the start date".into(),
        ));
    }
    Ok(())
}

/// Opt-in password change on an edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordChange {
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    pub fn new(new_password: impl Into<String>, confirm_password: impl Into<String>) -> Self {
        Self {
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Returns the password to send once it matches and is long enough.
    pub fn validate(&self, min_len: usize) -> Result<&str, CoreError> {
        if self.new_password != self.confirm_password {
            return Err(CoreError::Validation("Passwords do not match".into()));
        }
        if self.new_password.chars().count() < min_len {
            return Err(CoreError::Validation(format!(
                "Password must be at least {min_len} characters long"
            )));
        }
        Ok(&self.new_password)
    }
}
