use serde::{Deserialize, Serialize};

use crate::enums::ApprovalStatus;
use crate::errors::CoreError;
use crate::lenient;

/// A semester registration as the faculty advisor reviews it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationApplication {
    #[serde(
        alias = "applicationId",
        alias = "id",
        deserialize_with = "lenient::id"
    )]
    pub application_id: String,
    #[serde(alias = "studentId", deserialize_with = "lenient::id")]
    pub student_id: String,
    #[serde(default, alias = "studentName")]
    pub student_name: Option<String>,
    #[serde(
        default,
        alias = "academicYearId",
        deserialize_with = "lenient::opt_id"
    )]
    pub academic_year_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub cpi: Option<f64>,
    #[serde(
        default,
        alias = "courseIds",
        alias = "courses",
        deserialize_with = "lenient::id_list"
    )]
    pub course_ids: Vec<String>,
    #[serde(default)]
    pub status: ApprovalStatus,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Advisor decision on an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationDecision {
    pub status: ApprovalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl ApplicationDecision {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.status == ApprovalStatus::Pending {
            return Err(CoreError::invalid(
                "status",
                "a decision must approve or reject",
            ));
        }
        Ok(())
    }
}
