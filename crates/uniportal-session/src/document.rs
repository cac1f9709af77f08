//! The persisted document.
//!
//! Field names on disk are the storage keys the portal has always used
//! (`token`, `role`, `userId`, `studentProfile`, `academic_year_id`,
//! `selectedCourses`, ...). Everything is optional: a missing key reads as
//! "not set", never as an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uniportal_core::entities::{SelectedCourse, StudentProfile};
use uniportal_core::enums::Role;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_profile: Option<StudentProfile>,
    #[serde(
        default,
        rename = "academic_year_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub academic_year_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_courses: Option<Vec<SelectedCourse>>,

    /// Offerings the backend acknowledged on the last selection submit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recorded_offerings: Vec<String>,
    /// Set once the fee step of finalize has succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_receipt: Option<FeeReceipt>,
    /// Key sent with every mutating registration call of the current draft.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

impl StoredState {
    /// Drop every workflow key, keeping identity.
    pub fn clear_workflow(&mut self) {
        self.student_profile = None;
        self.academic_year_id = None;
        self.clear_selection();
    }

    /// Drop selection and finalize progress, keeping the profile copy.
    pub fn clear_selection(&mut self) {
        self.selected_courses = None;
        self.recorded_offerings.clear();
        self.fee_receipt = None;
        self.idempotency_key = None;
    }
}

/// Proof that the fee step of finalize went through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeReceipt {
    pub academic_year_id: String,
    pub transaction_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_id: Option<String>,
    #[serde(default)]
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_match_portal_names() {
        let state = StoredState {
            token: Some("t".into()),
            role: Some(Role::Student),
            user_id: Some("U1".into()),
            student_id: Some("S1".into()),
            student_name: Some("Asha".into()),
            academic_year_id: Some("2022".into()),
            selected_courses: Some(Vec::new()),
            ..Default::default()
        };
        let value = serde_json::to_value(&state).unwrap();
        for key in [
            "token",
            "role",
            "userId",
            "studentId",
            "studentName",
            "academic_year_id",
            "selectedCourses",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert!(value.get("feeReceipt").is_none());
    }

    #[test]
    fn empty_document_parses() {
        let state: StoredState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, StoredState::default());
    }

    #[test]
    fn clear_selection_keeps_profile() {
        let mut state = StoredState {
            student_profile: Some(StudentProfile::default()),
            selected_courses: Some(Vec::new()),
            recorded_offerings: vec!["O1".into()],
            idempotency_key: Some("k".into()),
            ..Default::default()
        };
        state.clear_selection();
        assert!(state.student_profile.is_some());
        assert!(state.selected_courses.is_none());
        assert!(state.recorded_offerings.is_empty());
        assert!(state.idempotency_key.is_none());
    }
}
