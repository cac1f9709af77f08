//! The handle every page controller works through.

use std::time::Duration;

use serde::Serialize;
use uniportal_client::PortalClient;
use uniportal_config::RegistrationConfig;
use uniportal_core::Route;
use uniportal_core::entities::Session;
use uniportal_core::enums::Role;
use uniportal_session::{SessionContext, SessionError};

use crate::error::PortalError;

/// Backend client, local session and workflow settings, passed explicitly
/// to each controller.
#[derive(Debug, Clone)]
pub struct Portal {
    pub client: PortalClient,
    pub session: SessionContext,
    pub settings: RegistrationConfig,
}

impl Portal {
    pub const fn new(
        client: PortalClient,
        session: SessionContext,
        settings: RegistrationConfig,
    ) -> Self {
        Self {
            client,
            session,
            settings,
        }
    }

    /// Check the stored role before anything touches the network.
    ///
    /// A missing role reads as student, so an anonymous caller of an admin
    /// page gets "Access denied" rather than a login prompt.
    ///
    /// # Errors
    ///
    /// [`PortalError::AccessDenied`] when the role is not in `allowed`, or
    /// a storage error if no one is logged in.
    pub fn authorize(&self, allowed: &[Role]) -> Result<Session, PortalError> {
        let role = self.session.role()?;
        if !allowed.contains(&role) {
            tracing::debug!(%role, ?allowed, "role check failed");
            return Err(PortalError::AccessDenied);
        }
        Ok(self.session.require_session()?)
    }

    /// Any logged-in role.
    pub fn signed_in(&self) -> Result<Session, PortalError> {
        Ok(self.session.require_session()?)
    }

    /// Student id for the registration pages; absent means back to login.
    pub fn student_id(&self) -> Result<String, PortalError> {
        self.session.student_id()?.ok_or_else(|| {
            PortalError::Storage(SessionError::NotAuthenticated).blocking(Route::Login)
        })
    }
}

/// Navigation a controller asks for once it is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub route: Route,
    #[serde(rename = "delay_ms", serialize_with = "as_millis")]
    pub delay: Duration,
}

impl Redirect {
    #[must_use]
    pub const fn now(route: Route) -> Self {
        Self {
            route,
            delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn after(route: Route, delay: Duration) -> Self {
        Self { route, delay }
    }

    /// Sleep out the delay, then hand back the route.
    pub async fn follow(self) -> Route {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.route
    }
}

/// A page either renders or sends the user elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<T> {
    Ready(T),
    Redirect(Redirect),
}

impl<T> Step<T> {
    #[must_use]
    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Redirect(_) => None,
        }
    }

    #[must_use]
    pub const fn redirect(&self) -> Option<&Redirect> {
        match self {
            Self::Ready(_) => None,
            Self::Redirect(redirect) => Some(redirect),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn as_millis<S: serde::Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(delay.as_millis() as u64)
}
