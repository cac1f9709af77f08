use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::lenient;
use crate::validation::require_fields;

/// Profile as shown on the first registration step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(alias = "studentId", alias = "id", deserialize_with = "lenient::id")]
    pub student_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "program")]
    pub programme: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(
        default,
        alias = "currentSemester",
        alias = "semester",
        deserialize_with = "lenient::opt_count"
    )]
    pub current_semester: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub cpi: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub batch: Option<String>,
    #[serde(
        default,
        alias = "facultyAdvisorId",
        alias = "advisor_id",
        deserialize_with = "lenient::opt_id"
    )]
    pub faculty_advisor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl StudentProfile {
    /// Overlay editable contact fields onto the profile.
    pub fn apply_editable(&mut self, fields: &EditableFields) {
        if let Some(phone) = &fields.phone {
            self.phone = Some(phone.clone());
        }
        if let Some(email) = &fields.email {
            self.email = Some(email.clone());
        }
        if let Some(contact) = &fields.contact {
            self.contact = Some(contact.clone());
        }
        if let Some(address) = &fields.address {
            self.address = Some(address.clone());
        }
    }
}

/// The subset of a profile a student may change themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        alias = "emergency_contact",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl EditableFields {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.phone.is_none()
            && self.email.is_none()
            && self.contact.is_none()
            && self.address.is_none()
    }
}

/// Student record as the admin screens list it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(alias = "studentId", alias = "id", deserialize_with = "lenient::id")]
    pub student_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, alias = "program")]
    pub programme: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub batch: Option<String>,
    #[serde(
        default,
        alias = "currentSemester",
        deserialize_with = "lenient::opt_count"
    )]
    pub current_semester: Option<i64>,
    #[serde(
        default,
        alias = "facultyAdvisorId",
        deserialize_with = "lenient::opt_id"
    )]
    pub faculty_advisor_id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Body of the add-student form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewStudent {
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub programme: String,
    pub department: String,
    pub batch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_semester: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_advisor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl NewStudent {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_fields(&[
            ("student_id", &self.student_id),
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
            ("programme", &self.programme),
            ("department", &self.department),
            ("batch", &self.batch),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn profile_reads_mixed_backend_shapes() {
        let json = r#"{
            "studentId": 2101,
            "name": "Asha Rao",
            "program": "B.Tech",
            "department": "CSE",
            "currentSemester": "5",
            "cpi": "8.4",
            "batch": 2022,
            "facultyAdvisorId": 17,
            "phone": "9000000000"
        }"#;
        let profile: StudentProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.student_id, "2101");
        assert_eq!(profile.programme.as_deref(), Some("B.Tech"));
        assert_eq!(profile.current_semester, Some(5));
        assert_eq!(profile.cpi, Some(8.4));
        assert_eq!(profile.batch.as_deref(), Some("2022"));
        assert_eq!(profile.faculty_advisor_id.as_deref(), Some("17"));
    }

    #[test]
    fn apply_editable_only_touches_given_fields() {
        let mut profile = StudentProfile {
            student_id: "S1".into(),
            phone: Some("111".into()),
            address: Some("Old Hostel".into()),
            ..Default::default()
        };
        profile.apply_editable(&EditableFields {
            address: Some("New Hostel".into()),
            ..Default::default()
        });
        assert_eq!(profile.phone.as_deref(), Some("111"));
        assert_eq!(profile.address.as_deref(), Some("New Hostel"));
    }

    #[test]
    fn editable_fields_skip_absent_values() {
        let fields = EditableFields {
            email: Some("a@uni.edu".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            serde_json::json!({"email": "a@uni.edu"})
        );
        assert!(EditableFields::default().is_empty());
    }

    #[test]
    fn new_student_requires_core_fields() {
        let form = NewStudent {
            student_id: "S9".into(),
            name: "Ravi".into(),
            ..Default::default()
        };
        let err = form.validate().unwrap_err();
        let CoreError::MissingFields { fields } = err else {
            panic!("expected missing fields");
        };
        assert_eq!(
            fields,
            vec!["email", "password", "programme", "department", "batch"]
        );
    }
}
