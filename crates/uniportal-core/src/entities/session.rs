use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// An authenticated identity as the portal remembers it between commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub user_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<String>,
}

impl Session {
    /// Student id for student-scoped calls.
    ///
    /// Falls back to the user id for student sessions, since the login
    /// endpoint does not always return a separate student id.
    #[must_use]
    pub fn student_id(&self) -> Option<&str> {
        self.student_id
            .as_deref()
            .or_else(|| (self.role == Role::Student).then_some(self.user_id.as_str()))
            .filter(|id| !id.is_empty())
    }

    #[must_use]
    pub fn faculty_id(&self) -> Option<&str> {
        self.faculty_id
            .as_deref()
            .or_else(|| (self.role == Role::Faculty).then_some(self.user_id.as_str()))
            .filter(|id| !id.is_empty())
    }
}

/// Login form body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            token: "t".into(),
            role,
            user_id: "U7".into(),
            name: "Asha".into(),
            student_id: None,
            faculty_id: None,
        }
    }

    #[test]
    fn student_session_falls_back_to_user_id() {
        assert_eq!(session(Role::Student).student_id(), Some("U7"));
        assert_eq!(session(Role::Admin).student_id(), None);
    }

    #[test]
    fn explicit_ids_win() {
        let mut s = session(Role::Faculty);
        s.faculty_id = Some("F2".into());
        assert_eq!(s.faculty_id(), Some("F2"));
    }

    #[test]
    fn debug_hides_password() {
        let creds = Credentials {
            email: "a@uni.edu".into(),
            password: "hunter22".into(),
            role: Role::Student,
        };
        assert!(!format!("{creds:?}").contains("hunter22"));
    }
}
