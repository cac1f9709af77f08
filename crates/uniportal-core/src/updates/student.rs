use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::{SparseUpdate, non_empty, parse_field, parse_positive};
use crate::errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StudentField {
    Name,
    Email,
    Phone,
    Programme,
    Department,
    Batch,
    CurrentSemester,
    FacultyAdvisorId,
    Address,
}

impl StudentField {
    pub const ALL: [Self; 9] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Programme,
        Self::Department,
        Self::Batch,
        Self::CurrentSemester,
        Self::FacultyAdvisorId,
        Self::Address,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Programme => "programme",
            Self::Department => "department",
            Self::Batch => "batch",
            Self::CurrentSemester => "current_semester",
            Self::FacultyAdvisorId => "faculty_advisor_id",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for StudentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudentField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(&Self::ALL, s, "student field")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_semester: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_advisor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl SparseUpdate for StudentUpdate {
    type Field = StudentField;
    const HAS_PASSWORD: bool = true;

    fn set_field(&mut self, field: StudentField, raw: &str) -> Result<(), CoreError> {
        let name = field.as_str();
        match field {
            StudentField::Name => self.name = Some(non_empty(name, raw)?),
            StudentField::Email => self.email = Some(non_empty(name, raw)?),
            StudentField::Phone => self.phone = Some(raw.trim().to_string()),
            StudentField::Programme => self.programme = Some(non_empty(name, raw)?),
            StudentField::Department => self.department = Some(non_empty(name, raw)?),
            StudentField::Batch => self.batch = Some(non_empty(name, raw)?),
            StudentField::CurrentSemester => {
                self.current_semester = Some(parse_positive(name, raw)?);
            }
            StudentField::FacultyAdvisorId => {
                self.faculty_advisor_id = Some(non_empty(name, raw)?);
            }
            StudentField::Address => self.address = Some(raw.trim().to_string()),
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
    fn only_set_fields_are_serialized() {
        let mut update = StudentUpdate::default();
        update.set_field(StudentField::Email, " new@uni.edu ").unwrap();
        update.set_field(StudentField::CurrentSemester, "6").unwrap();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"email": "new@uni.edu", "current_semester": 6})
        );
    }

    #[test]
    fn numeric_fields_are_parsed() {
        let mut update = StudentUpdate::default();
        assert!(update.set_field(StudentField::CurrentSemester, "six").is_err());
        assert!(update.set_field(StudentField::CurrentSemester, "0").is_err());
        assert!(update.is_empty());
    }

    #[test]
    fn field_names_parse_with_hyphens() {
        assert_eq!(
            "faculty-advisor-id".parse::<StudentField>().unwrap(),
            StudentField::FacultyAdvisorId
        );
        assert!("gpa".parse::<StudentField>().is_err());
    }

    #[test]
    fn password_alone_makes_update_non_empty() {
        let mut update = StudentUpdate::default();
        update.set_password("longenough");
        assert!(!update.is_empty());
    }
}
