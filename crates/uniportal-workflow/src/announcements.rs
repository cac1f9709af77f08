//! Announcements page.

use uniportal_core::entities::{Announcement, NewAnnouncement};
use uniportal_core::enums::Role;

use crate::error::PortalError;
use crate::portal::Portal;

/// Announcements addressed to the caller's role, newest first when the
/// backend reports dates.
pub async fn list(portal: &Portal) -> Result<Vec<Announcement>, PortalError> {
    let session = portal.signed_in()?;
    let mut items: Vec<Announcement> = portal
        .client
        .list_announcements(&session)
        .await?
        .into_iter()
        .filter(|a| a.audience.includes(session.role))
        .collect();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(items)
}

/// Post an announcement (admin and faculty).
pub async fn post(portal: &Portal, mut announcement: NewAnnouncement) -> Result<String, PortalError> {
    let session = portal.authorize(&[Role::Admin, Role::Faculty])?;
    announcement.validate()?;
    if announcement.posted_by.is_none() {
        announcement.posted_by = Some(session.user_id.clone());
    }
    let ack = portal
        .client
        .post_announcement(&session, &announcement)
        .await?;
    Ok(ack.message_or("Announcement posted successfully"))
}
