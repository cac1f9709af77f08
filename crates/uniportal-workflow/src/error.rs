//! Workflow error taxonomy.
//!
//! Every failure a page can show falls into one [`ErrorKind`]. Client and
//! core errors are folded in here so callers match on one enum.

use thiserror::Error;
use uniportal_client::{CONNECT_FAILED, ClientError};
use uniportal_core::{CoreError, Route};
use uniportal_session::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Server,
    Network,
    Authorization,
    Rejected,
    Storage,
}

#[derive(Debug, Error)]
pub enum PortalError {
    /// Client-side check failed; no request was sent.
    #[error(transparent)]
    Validation(CoreError),

    /// The stored role may not use this page.
    #[error("{}", uniportal_core::errors::ACCESS_DENIED)]
    AccessDenied,

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{CONNECT_FAILED}")]
    Network(#[source] ClientError),

    /// 2xx with `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// The backend answered with something we could not read.
    #[error("{0}")]
    Protocol(String),

    #[error(transparent)]
    Storage(#[from] SessionError),

    #[error("could not write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The page cannot be shown at all; the caller should navigate away.
    #[error("{cause}")]
    Blocked {
        route: Route,
        #[source]
        cause: Box<PortalError>,
    },

    /// Some course selections were accepted and some were not.
    #[error(
        "{} of {} course selections failed: {}",
        .failed.len(),
        .failed.len() + .recorded.len(),
        summarize(.failed)
    )]
    PartialSelection {
        recorded: Vec<String>,
        failed: Vec<(String, String)>,
    },

    /// Finalize stopped after the fee went through.
    #[error(
        "Fee submitted but semester registration failed: {cause}. Run finalize again to retry registration."
    )]
    RegistrationPending {
        #[source]
        cause: Box<PortalError>,
    },
}

fn summarize(failed: &[(String, String)]) -> String {
    failed
        .iter()
        .map(|(offering, reason)| format!("{offering} ({reason})"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl PortalError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(CoreError::Validation(message.into()))
    }

    /// Wrap as a blocking error that sends the user to `route`.
    #[must_use]
    pub fn blocking(self, route: Route) -> Self {
        Self::Blocked {
            route,
            cause: Box::new(self),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::AccessDenied => ErrorKind::Authorization,
            Self::Server { .. } | Self::Protocol(_) => ErrorKind::Server,
            Self::Network(_) => ErrorKind::Network,
            Self::Rejected(_) => ErrorKind::Rejected,
            Self::Storage(SessionError::NotAuthenticated) => ErrorKind::Authorization,
            Self::Storage(_) | Self::Io { .. } => ErrorKind::Storage,
            Self::Blocked { cause, .. } | Self::RegistrationPending { cause } => cause.kind(),
            Self::PartialSelection { .. } => ErrorKind::Server,
        }
    }

    /// Where the page should send the user, if anywhere.
    #[must_use]
    pub const fn redirect(&self) -> Option<Route> {
        match self {
            Self::Blocked { route, .. } => Some(*route),
            Self::Storage(SessionError::NotAuthenticated) => Some(Route::Login),
            _ => None,
        }
    }
}

impl From<CoreError> for PortalError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::AccessDenied => Self::AccessDenied,
            other => Self::Validation(other),
        }
    }
}

impl From<ClientError> for PortalError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Http(_) => Self::Network(error),
            ClientError::Api { status, message } => Self::Server { status, message },
            ClientError::Rejected(message) => Self::Rejected(message),
            ClientError::Parse { .. } | ClientError::Setup(_) => Self::Protocol(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_denied_from_core_keeps_kind() {
        let err = PortalError::from(CoreError::AccessDenied);
        assert_eq!(err.kind(), ErrorKind::Authorization);
        assert_eq!(err.to_string(), "Access denied");
    }

    #[test]
    fn server_message_is_verbatim() {
        let err = PortalError::from(ClientError::Api {
            status: 400,
            message: "Email already exists".into(),
        });
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.to_string(), "Email already exists");
    }

    #[test]
    fn blocked_error_carries_route_and_cause_text() {
        let err = PortalError::Rejected("Profile not found".into()).blocking(Route::Login);
        assert_eq!(err.redirect(), Some(Route::Login));
        assert_eq!(err.kind(), ErrorKind::Rejected);
        assert_eq!(err.to_string(), "Profile not found");
    }

    #[test]
    fn partial_selection_lists_failures() {
        let err = PortalError::PartialSelection {
            recorded: vec!["O1".into()],
            failed: vec![("O2".into(), "Seats full".into())],
        };
        assert_eq!(
            err.to_string(),
            "1 of 2 course selections failed: O2 (Seats full)"
        );
    }

    #[test]
    fn not_logged_in_redirects_to_login() {
        let err = PortalError::from(SessionError::NotAuthenticated);
        assert_eq!(err.redirect(), Some(Route::Login));
    }
}
