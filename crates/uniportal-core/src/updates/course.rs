use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::{SparseUpdate, non_empty, parse_field, parse_positive};
use crate::errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CourseField {
    CourseCode,
    CourseName,
    Credits,
    Department,
    Description,
}

impl CourseField {
    pub const ALL: [Self; 5] = [
        Self::CourseCode,
        Self::CourseName,
        Self::Credits,
        Self::Department,
        Self::Description,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CourseCode => "course_code",
            Self::CourseName => "course_name",
            Self::Credits => "credits",
            Self::Department => "department",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(&Self::ALL, s, "course field")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SparseUpdate for CourseUpdate {
    type Field = CourseField;
    const HAS_PASSWORD: bool = false;

    fn set_field(&mut self, field: CourseField, raw: &str) -> Result<(), CoreError> {
        let name = field.as_str();
        match field {
            CourseField::CourseCode => self.course_code = Some(non_empty(name, raw)?),
            CourseField::CourseName => self.course_name = Some(non_empty(name, raw)?),
            CourseField::Credits => self.credits = Some(parse_positive(name, raw)?),
            CourseField::Department => self.department = Some(non_empty(name, raw)?),
            CourseField::Description => self.description = Some(raw.trim().to_string()),
        }
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
    fn credits_must_be_positive() {
        let mut update = CourseUpdate::default();
        assert!(update.set_field(CourseField::Credits, "0").is_err());
        update.set_field(CourseField::Credits, "3").unwrap();
        assert_eq!(update.credits, Some(3));
    }

    #[test]
    fn password_is_ignored_for_courses() {
        let mut update = CourseUpdate::default();
        update.set_password("whatever");
        assert!(update.is_empty());
    }
}
