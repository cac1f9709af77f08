#![allow(dead_code)]

use uniportal_client::PortalClient;
use uniportal_config::RegistrationConfig;
use uniportal_core::entities::Session;
use uniportal_core::enums::Role;
use uniportal_session::SessionContext;
use uniportal_workflow::Portal;
use wiremock::MockServer;

pub async fn portal() -> (MockServer, Portal) {
    let server = MockServer::start().await;
    let portal = Portal::new(
        PortalClient::new(&server.uri()).unwrap(),
        SessionContext::in_memory(),
        RegistrationConfig {
            redirect_delay_ms: 0,
            ..RegistrationConfig::default()
        },
    );
    (server, portal)
}

pub async fn portal_as(role: Role) -> (MockServer, Portal) {
    let (server, portal) = portal().await;
    login_as(&portal, role);
    (server, portal)
}

pub fn login_as(portal: &Portal, role: Role) {
    let user_id = match role {
        Role::Admin => "A1",
        Role::Faculty => "F1",
        Role::Student => "2101",
    };
    portal
        .session
        .start(&Session {
            token: "jwt".into(),
            role,
            user_id: user_id.into(),
            name: "Test User".into(),
            student_id: None,
            faculty_id: None,
        })
        .unwrap();
}

pub async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map_or(0, |r| r.len())
}
