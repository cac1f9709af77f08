//! Registration applications assigned to a faculty advisor.

use uniportal_core::entities::{ApplicationDecision, RegistrationApplication, Session};
use uniportal_core::enums::{ApprovalStatus, Role};

use crate::error::PortalError;
use crate::portal::Portal;

fn faculty_id(portal: &Portal) -> Result<(Session, String), PortalError> {
    let session = portal.authorize(&[Role::Faculty])?;
    let id = session
        .faculty_id()
        .map(str::to_string)
        .ok_or_else(|| PortalError::validation("No faculty id stored for this session"))?;
    Ok((session, id))
}

/// Applications for the logged-in advisor, optionally narrowed by status.
pub async fn list(
    portal: &Portal,
    status: Option<ApprovalStatus>,
) -> Result<Vec<RegistrationApplication>, PortalError> {
    let (session, faculty_id) = faculty_id(portal)?;
    let mut items = portal
        .client
        .list_applications(&session, &faculty_id)
        .await?;
    if let Some(status) = status {
        items.retain(|a| a.status == status);
    }
    Ok(items)
}

pub async fn get(portal: &Portal, application_id: &str) -> Result<RegistrationApplication, PortalError> {
    let session = portal.authorize(&[Role::Faculty])?;
    Ok(portal
        .client
        .get_application(&session, application_id)
        .await?)
}

/// Approve or reject an application.
pub async fn decide(
    portal: &Portal,
    application_id: &str,
    status: ApprovalStatus,
    remarks: Option<String>,
) -> Result<String, PortalError> {
    let session = portal.authorize(&[Role::Faculty])?;
    let decision = ApplicationDecision {
        status,
        remarks: remarks.filter(|r| !r.trim().is_empty()),
    };
    decision.validate()?;
    let ack = portal
        .client
        .decide_application(&session, application_id, &decision)
        .await?;
    tracing::info!(application_id, %status, "application decided");
    Ok(ack.message_or(&format!("Application {}", status.as_str().to_lowercase())))
}
