//! How each endpoint proves who is calling.
//!
//! The backend is not consistent: admin routes want a bearer token and a
//! `Role` header, the approval routes only look at `Role`, and the
//! registration offerings want `Role` plus `StudentId`. Every endpoint
//! method names its scheme explicitly instead of guessing.

use reqwest::RequestBuilder;
use serde::Deserialize;
use uniportal_core::entities::{Credentials, Session};
use uniportal_core::enums::Role;
use uniportal_core::lenient;

use crate::{Call, ClientError, PortalClient};

pub const ROLE_HEADER: &str = "Role";
pub const STUDENT_ID_HEADER: &str = "StudentId";
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// Nothing attached (login).
    None,
    Bearer,
    BearerAndRole,
    /// `Role` header only.
    Role,
    /// `Role` and `StudentId` headers, no token.
    RoleAndStudent,
}

impl AuthScheme {
    pub(crate) fn apply(
        self,
        builder: RequestBuilder,
        session: Option<&Session>,
        student_id: Option<&str>,
    ) -> RequestBuilder {
        let Some(session) = session else {
            return builder;
        };
        let builder = if self.sends_token() {
            builder.bearer_auth(&session.token)
        } else {
            builder
        };
        let builder = if self.sends_role() {
            builder.header(ROLE_HEADER, session.role.as_str())
        } else {
            builder
        };
        match (self, student_id.or_else(|| session.student_id())) {
            (Self::RoleAndStudent, Some(id)) => builder.header(STUDENT_ID_HEADER, id),
            _ => builder,
        }
    }

    #[must_use]
    pub const fn sends_token(self) -> bool {
        matches!(self, Self::Bearer | Self::BearerAndRole)
    }

    #[must_use]
    pub const fn sends_role(self) -> bool {
        matches!(self, Self::BearerAndRole | Self::Role | Self::RoleAndStudent)
    }
}

/// What the login route answers. The user block may be nested or flat.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, alias = "accessToken")]
    token: Option<String>,
    #[serde(default)]
    role: Option<Role>,
    #[serde(default)]
    user: Option<LoginUser>,
    #[serde(flatten)]
    flat: LoginUser,
}

#[derive(Debug, Default, Deserialize)]
struct LoginUser {
    #[serde(
        default,
        alias = "userId",
        alias = "user_id",
        deserialize_with = "lenient::opt_id"
    )]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    role: Option<Role>,
    #[serde(default, alias = "studentId", deserialize_with = "lenient::opt_id")]
    student_id: Option<String>,
    #[serde(default, alias = "facultyId", deserialize_with = "lenient::opt_id")]
    faculty_id: Option<String>,
}

impl LoginResponse {
    fn into_session(self, requested: Role) -> Result<Session, ClientError> {
        if self.success == Some(false) {
            return Err(ClientError::Rejected(
                self.message.unwrap_or_else(|| "Login failed".to_string()),
            ));
        }
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::Parse {
                path: "/api/auth/login".into(),
                reason: "response carried no token".into(),
            })?;
        let user = self.user.unwrap_or_default();
        let flat = self.flat;
        Ok(Session {
            token,
            role: self.role.or(user.role).or(flat.role).unwrap_or(requested),
            user_id: user.id.or(flat.id).unwrap_or_default(),
            name: user.name.or(flat.name).unwrap_or_default(),
            student_id: user.student_id.or(flat.student_id),
            faculty_id: user.faculty_id.or(flat.faculty_id),
        })
    }
}

impl PortalClient {
    /// `POST /api/auth/login`.
    ///
    /// The role the server reports wins over the one requested.
    ///
    /// # Errors
    ///
    /// [`ClientError::Api`] for bad credentials, [`ClientError::Rejected`] if
    /// the body says `success: false`, [`ClientError::Parse`] if no token
    /// comes back.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ClientError> {
        let call = Call::post("/api/auth/login", AuthScheme::None);
        let bytes = self.execute(call, Some(credentials)).await?;
        let response: LoginResponse = crate::http::decode("/api/auth/login", &bytes)?;
        response.into_session(credentials.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniportal_core::enums::Role;

    fn session() -> Session {
        Session {
            token: "jwt".into(),
            role: Role::Student,
            user_id: "2101".into(),
            name: "Asha".into(),
            student_id: None,
            faculty_id: None,
        }
    }

    fn headers(scheme: AuthScheme) -> reqwest::header::HeaderMap {
        let client = reqwest::Client::new();
        let builder = scheme.apply(client.get("http://localhost/x"), Some(&session()), None);
        builder.build().unwrap().headers().clone()
    }

    #[test]
    fn bearer_and_role() {
        let h = headers(AuthScheme::BearerAndRole);
        assert_eq!(h["authorization"], "Bearer jwt");
        assert_eq!(h[ROLE_HEADER], "student");
        assert!(h.get(STUDENT_ID_HEADER).is_none());
    }

    #[test]
    fn role_and_student_sends_no_token() {
        let h = headers(AuthScheme::RoleAndStudent);
        assert!(h.get("authorization").is_none());
        assert_eq!(h[ROLE_HEADER], "student");
        assert_eq!(h[STUDENT_ID_HEADER], "2101");
    }

    #[test]
    fn login_reads_nested_user() {
        let json = r#"{"token": "jwt", "user": {"id": 7, "name": "Dr. Meera", "role": "faculty"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        let session = response.into_session(Role::Student).unwrap();
        assert_eq!(session.role, Role::Faculty);
        assert_eq!(session.user_id, "7");
        assert_eq!(session.faculty_id(), Some("7"));
    }

    #[test]
    fn login_reads_flat_user_and_defaults_role() {
        let json = r#"{"success": true, "token": "jwt", "userId": "2101", "name": "Asha", "studentId": 2101}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        let session = response.into_session(Role::Student).unwrap();
        assert_eq!(session.role, Role::Student);
        assert_eq!(session.student_id.as_deref(), Some("2101"));
    }

    #[test]
    fn login_without_token_fails() {
        let response: LoginResponse = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert!(matches!(
            response.into_session(Role::Admin),
            Err(ClientError::Parse { .. })
        ));
    }

    #[test]
    fn none_sends_nothing() {
        let h = headers(AuthScheme::None);
        assert!(h.get("authorization").is_none());
        assert!(h.get(ROLE_HEADER).is_none());
    }
}
