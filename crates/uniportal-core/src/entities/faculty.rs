use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::lenient;
use crate::validation::require_fields;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    #[serde(alias = "facultyId", alias = "id", deserialize_with = "lenient::id")]
    pub faculty_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
}

/// Body of the add-faculty form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewFaculty {
    pub faculty_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl NewFaculty {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_fields(&[
            ("faculty_id", &self.faculty_id),
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
            ("department", &self.department),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faculty_accepts_numeric_id_alias() {
        let faculty: Faculty =
            serde_json::from_str(r#"{"id": 17, "name": "Dr. Meera", "department": "EE"}"#)
                .unwrap();
        assert_eq!(faculty.faculty_id, "17");
        assert_eq!(faculty.department.as_deref(), Some("EE"));
        assert!(faculty.designation.is_none());
    }

    #[test]
    fn new_faculty_requires_password() {
        let form = NewFaculty {
            faculty_id: "F1".into(),
            name: "Dr. Meera".into(),
            email: "meera@uni.edu".into(),
            department: "EE".into(),
            ..Default::default()
        };
        assert!(form.validate().unwrap_err().to_string().contains("password"));
    }
}
