//! Login, logout and "who am I".

use chrono::{DateTime, Utc};
use serde::Serialize;
use uniportal_core::Route;
use uniportal_core::entities::Credentials;
use uniportal_core::enums::Role;
use uniportal_core::validation::require_fields;
use uniportal_session::token;

use crate::error::PortalError;
use crate::portal::Portal;

#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    pub role: Role,
    pub name: String,
    pub user_id: String,
    pub route: Route,
}

/// Post credentials, remember the session, and pick the landing page.
///
/// `role` defaults to student when not given.
///
/// # Errors
///
/// Validation when email or password is blank; otherwise whatever the
/// login route or the session store report.
pub async fn login(
    portal: &Portal,
    email: &str,
    password: &str,
    role: Option<Role>,
) -> Result<LoginOutcome, PortalError> {
    require_fields(&[("email", email), ("password", password)])?;
    let credentials = Credentials {
        email: email.trim().to_string(),
        password: password.to_string(),
        role: role.unwrap_or_default(),
    };
    let session = portal.client.login(&credentials).await?;
    portal.session.start(&session)?;
    tracing::info!(role = %session.role, user = %session.user_id, "logged in");
    Ok(LoginOutcome {
        role: session.role,
        route: session.role.landing_route(),
        name: session.name,
        user_id: session.user_id,
    })
}

/// Forget every stored key.
pub fn logout(portal: &Portal) -> Result<Route, PortalError> {
    portal.session.logout()?;
    Ok(Route::Login)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthStatus {
    pub logged_in: bool,
    pub role: Option<Role>,
    pub name: Option<String>,
    pub user_id: Option<String>,
    pub student_id: Option<String>,
    /// From the token's `exp`, when it is a JWT.
    pub expires_at: Option<DateTime<Utc>>,
    pub expired: Option<bool>,
    pub store: String,
}

pub fn status(portal: &Portal) -> Result<AuthStatus, PortalError> {
    let store = portal.session.describe();
    let Some(session) = portal.session.session()? else {
        return Ok(AuthStatus {
            logged_in: false,
            role: None,
            name: None,
            user_id: None,
            student_id: None,
            expires_at: None,
            expired: None,
            store,
        });
    };
    let expires_at = token::decode_expiry(&session.token).ok();
    let expired = token::is_expired(&session.token);
    if expired == Some(true) {
        tracing::warn!("stored token has expired, log in again");
    }
    Ok(AuthStatus {
        logged_in: true,
        role: Some(session.role),
        student_id: session.student_id().map(str::to_string),
        name: Some(session.name),
        user_id: Some(session.user_id),
        expires_at,
        expired,
        store,
    })
}
