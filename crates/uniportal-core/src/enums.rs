//! Roles, record statuses and the registration step machine.
//!
//! Roles serialize in lowercase because that is what the login endpoint and
//! the `Role` header expect. Record statuses keep the capitalised form the
//! backend stores (`Pending`, `Approved`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;
use crate::routes::Route;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Which family of pages and endpoints a session may use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "Admin", alias = "ADMIN")]
    Admin,
    #[serde(alias = "Faculty", alias = "FACULTY")]
    Faculty,
    #[default]
    #[serde(alias = "Student", alias = "STUDENT")]
    Student,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Faculty => "faculty",
            Self::Student => "student",
        }
    }

    /// Page a freshly logged-in session lands on.
    #[must_use]
    pub const fn landing_route(self) -> Route {
        match self {
            Self::Admin => Route::AdminDashboard,
            Self::Faculty => Route::FacultyDashboard,
            Self::Student => Route::StudentDashboard,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "faculty" => Ok(Self::Faculty),
            "student" | "" => Ok(Self::Student),
            other => Err(CoreError::invalid(
                "role",
                format!("'{other}' is not one of admin, faculty, student"),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// ApprovalStatus
// ---------------------------------------------------------------------------

/// Review state shared by fee transactions and registration applications.
///
/// ```text
/// Pending → Approved
///         → Rejected
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalStatus {
    #[default]
    #[serde(alias = "pending", alias = "PENDING")]
    Pending,
    #[serde(alias = "approved", alias = "APPROVED")]
    Approved,
    #[serde(alias = "rejected", alias = "REJECTED")]
    Rejected,
}

impl ApprovalStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved | Self::Rejected => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApprovalStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" | "approve" => Ok(Self::Approved),
            "rejected" | "reject" => Ok(Self::Rejected),
            other => Err(CoreError::invalid(
                "status",
                format!("'{other}' is not one of pending, approved, rejected"),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// EnrollmentStatus
// ---------------------------------------------------------------------------

/// Status of a course against a student, as the backend reports it.
///
/// Locally selected courses carry `Pending` until finalize succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    #[default]
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "registered")]
    Registered,
    #[serde(alias = "dropped")]
    Dropped,
}

impl EnrollmentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Registered => "Registered",
            Self::Dropped => "Dropped",
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Audience
// ---------------------------------------------------------------------------

/// Who an announcement is addressed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    #[serde(alias = "All", alias = "everyone")]
    All,
    #[serde(alias = "Students", alias = "student")]
    Students,
    #[serde(alias = "Faculty")]
    Faculty,
}

impl Audience {
    /// Whether a session with `role` should see announcements for this audience.
    #[must_use]
    pub const fn includes(self, role: Role) -> bool {
        match (self, role) {
            (Self::All, _) | (_, Role::Admin) => true,
            (Self::Students, Role::Student) | (Self::Faculty, Role::Faculty) => true,
            _ => false,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Students => "students",
            Self::Faculty => "faculty",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Audience {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "everyone" => Ok(Self::All),
            "students" | "student" => Ok(Self::Students),
            "faculty" => Ok(Self::Faculty),
            other => Err(CoreError::invalid(
                "audience",
                format!("'{other}' is not one of all, students, faculty"),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// RegistrationStep
// ---------------------------------------------------------------------------

/// Where a student is in the semester registration flow.
///
/// ```text
/// profile_review → course_selection → fee_and_finalize → submitted
/// ```
///
/// Transitions are driven by the student; any step can be opened directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    ProfileReview,
    CourseSelection,
    FeeAndFinalize,
    Submitted,
}

impl RegistrationStep {
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::ProfileReview => Some(Self::CourseSelection),
            Self::CourseSelection => Some(Self::FeeAndFinalize),
            Self::FeeAndFinalize => Some(Self::Submitted),
            Self::Submitted => None,
        }
    }

    #[must_use]
    pub const fn route(self) -> Route {
        match self {
            Self::ProfileReview => Route::RegistrationProfile,
            Self::CourseSelection => Route::RegistrationCourses,
            Self::FeeAndFinalize => Route::RegistrationFinalize,
            Self::Submitted => Route::StudentDashboard,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProfileReview => "profile_review",
            Self::CourseSelection => "course_selection",
            Self::FeeAndFinalize => "fee_and_finalize",
            Self::Submitted => "submitted",
        }
    }
}

impl fmt::Display for RegistrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
