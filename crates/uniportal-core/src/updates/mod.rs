//! Sparse update bodies for the edit forms.
//!
//! An edit form hydrates a record, the user ticks the fields they want to
//! change, and only those fields are sent. Each update struct serializes
//! nothing but the fields that were explicitly set, so an untouched field can
//! never be overwritten with a stale value.

mod calendar;
mod course;
mod faculty;
mod student;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::CoreError;

pub use calendar::{CalendarField, CalendarUpdate};
pub use course::{CourseField, CourseUpdate};
pub use faculty::{FacultyField, FacultyUpdate};
pub use student::{StudentField, StudentUpdate};

/// A PUT body built field by field.
pub trait SparseUpdate: Serialize + Default + fmt::Debug {
    /// The checkbox list of the edit form.
    type Field: Copy + Ord + fmt::Debug + fmt::Display + FromStr<Err = CoreError>;

    /// Whether the record carries a password that the form may change.
    const HAS_PASSWORD: bool;

    /// Record a new value for `field`, parsing it where the field is numeric.
    fn set_field(&mut self, field: Self::Field, raw: &str) -> Result<(), CoreError>;

    fn set_password(&mut self, password: &str);

    fn is_empty(&self) -> bool;
}

pub(crate) fn parse_field<T>(fields: &[T], raw: &str, what: &str) -> Result<T, CoreError>
where
    T: Copy + fmt::Display,
{
    let wanted = raw.trim().replace('-', "_").to_ascii_lowercase();
    fields
        .iter()
        .copied()
        .find(|field| field.to_string() == wanted)
        .ok_or_else(|| {
            let known = fields
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            CoreError::invalid(what, format!("unknown field '{raw}' (expected one of {known})"))
        })
}

pub(crate) fn parse_positive(field: &str, raw: &str) -> Result<u32, CoreError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| CoreError::invalid(field, format!("'{raw}' is not a positive whole number")))
}

pub(crate) fn non_empty(field: &str, raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::invalid(field, "cannot be blank"));
    }
    Ok(trimmed.to_string())
}
