//! Registration applications as a faculty advisor sees them.

use uniportal_core::entities::{ApplicationDecision, RegistrationApplication, Session};

use crate::{Ack, AuthScheme, Call, ClientError, PortalClient, seg};

impl PortalClient {
    pub async fn list_applications(
        &self,
        session: &Session,
        faculty_id: &str,
    ) -> Result<Vec<RegistrationApplication>, ClientError> {
        let path = format!("/api/faculty/{}/applications", seg(faculty_id));
        self.fetch_list(Call::get(path, AuthScheme::Bearer).by(session))
            .await
    }

    pub async fn get_application(
        &self,
        session: &Session,
        application_id: &str,
    ) -> Result<RegistrationApplication, ClientError> {
        let path = format!("/api/faculty/applications/{}", seg(application_id));
        self.fetch(Call::get(path, AuthScheme::Bearer).by(session))
            .await
    }

    pub async fn decide_application(
        &self,
        session: &Session,
        application_id: &str,
        decision: &ApplicationDecision,
    ) -> Result<Ack, ClientError> {
        let path = format!("/api/faculty/applications/{}", seg(application_id));
        self.mutate(Call::put(path, AuthScheme::Bearer).by(session), Some(decision))
            .await
    }
}
