use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::{SparseUpdate, non_empty, parse_field};
use crate::errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacultyField {
    Name,
    Email,
    Phone,
    Department,
    Designation,
}

impl FacultyField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Department,
        Self::Designation,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Department => "department",
            Self::Designation => "designation",
        }
    }
}

impl fmt::Display for FacultyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacultyField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(&Self::ALL, s, "faculty field")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacultyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl SparseUpdate for FacultyUpdate {
    type Field = FacultyField;
    const HAS_PASSWORD: bool = true;

    fn set_field(&mut self, field: FacultyField, raw: &str) -> Result<(), CoreError> {
        let name = field.as_str();
        match field {
            FacultyField::Name => self.name = Some(non_empty(name, raw)?),
            FacultyField::Email => self.email = Some(non_empty(name, raw)?),
            FacultyField::Phone => self.phone = Some(raw.trim().to_string()),
            FacultyField::Department => self.department = Some(non_empty(name, raw)?),
            FacultyField::Designation => self.designation = Some(raw.trim().to_string()),
        }
        Ok(())
    }

    fn set_password(&mut self, password: &str) {
        self.password = Some(password.to_string());
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_required_field_is_rejected() {
        let mut update = FacultyUpdate::default();
        assert!(update.set_field(FacultyField::Name, "  ").is_err());
        assert!(update.is_empty());
    }

    #[test]
    fn designation_may_be_cleared() {
        let mut update = FacultyUpdate::default();
        update.set_field(FacultyField::Designation, "").unwrap();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"designation": ""})
        );
    }
}
