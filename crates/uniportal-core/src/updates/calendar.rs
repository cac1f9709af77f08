use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::{SparseUpdate, non_empty, parse_field};
use crate::errors::CoreError;
use crate::validation::parse_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalendarField {
    Title,
    EventType,
    StartDate,
    EndDate,
    Description,
}

impl CalendarField {
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::EventType,
        Self::StartDate,
        Self::EndDate,
        Self::Description,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::EventType => "event_type",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for CalendarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(&Self::ALL, s, "calendar field")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalendarUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CalendarUpdate {
    /// When both ends of the range are being changed, they must stay ordered.
    pub fn check_range(&self) -> Result<(), CoreError> {
        if let (Some(start), Some(end)) = (&self.start_date, &self.end_date) {
            crate::validation::date_range(start, end)?;
        }
        Ok(())
    }
}

impl SparseUpdate for CalendarUpdate {
    type Field = CalendarField;
    const HAS_PASSWORD: bool = false;

    fn set_field(&mut self, field: CalendarField, raw: &str) -> Result<(), CoreError> {
        let name = field.as_str();
        let mut next = self.clone();
        match field {
            CalendarField::Title => next.title = Some(non_empty(name, raw)?),
            CalendarField::EventType => next.event_type = Some(non_empty(name, raw)?),
            CalendarField::StartDate => {
                parse_date(name, raw)?;
                next.start_date = Some(raw.trim().to_string());
            }
            CalendarField::EndDate => {
                parse_date(name, raw)?;
                next.end_date = Some(raw.trim().to_string());
            }
            CalendarField::Description => next.description = Some(raw.trim().to_string()),
        }
        next.check_range()?;
        *self = next;
        Ok(())
    }

    fn set_password(&mut self, _password: &str) {}

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_checked_as_they_are_set() {
        let mut update = CalendarUpdate::default();
        assert!(update.set_field(CalendarField::StartDate, "14/09/2026").is_err());
        update.set_field(CalendarField::StartDate, "2026-09-14").unwrap();
        assert!(update.set_field(CalendarField::EndDate, "2026-09-01").is_err());
        assert!(update.end_date.is_none());
    }
}
