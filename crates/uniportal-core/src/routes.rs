//! Page routes the workflows navigate between.
//!
//! Paths keep the exact casing the portal has always used, including the
//! capitalised faculty dashboard.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    AdminDashboard,
    FacultyDashboard,
    StudentDashboard,
    RegistrationProfile,
    RegistrationCourses,
    RegistrationFinalize,
}

impl Route {
    pub const ALL: [Self; 7] = [
        Self::Login,
        Self::AdminDashboard,
        Self::FacultyDashboard,
        Self::StudentDashboard,
        Self::RegistrationProfile,
        Self::RegistrationCourses,
        Self::RegistrationFinalize,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::AdminDashboard => "/admin/dashboard",
            Self::FacultyDashboard => "/faculty/Dashboard",
            Self::StudentDashboard => "/student/dashboard",
            Self::RegistrationProfile => "/student/registration/profile",
            Self::RegistrationCourses => "/student/registration/courses",
            Self::RegistrationFinalize => "/student/registration/finalize",
        }
    }

    /// Resolve a path back to a route. Trailing slashes are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
        if trimmed == "/" {
            return Some(Self::Login);
        }
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}
