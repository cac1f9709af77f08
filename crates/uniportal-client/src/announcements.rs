//! Announcements, readable by every role.

use uniportal_core::entities::{Announcement, NewAnnouncement, Session};

use crate::{Ack, AuthScheme, Call, ClientError, PortalClient};

impl PortalClient {
    pub async fn list_announcements(
        &self,
        session: &Session,
    ) -> Result<Vec<Announcement>, ClientError> {
        self.fetch_list(Call::get("/api/announcements", AuthScheme::Bearer).by(session))
            .await
    }

    pub async fn post_announcement(
        &self,
        session: &Session,
        announcement: &NewAnnouncement,
    ) -> Result<Ack, ClientError> {
        let call = Call::post("/api/announcements", AuthScheme::Bearer).by(session);
        self.mutate(call, Some(announcement)).await
    }
}
