mod common;

use pretty_assertions::assert_eq;
use serde_json::json;
use uniportal_core::Route;
use uniportal_core::enums::Role;
use uniportal_workflow::{ErrorKind, auth};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

async fn mount_login(server: &wiremock::MockServer, role: &str) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_partial_json(json!({"role": role})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "token": "jwt",
            "user": {"id": 9, "name": "User", "role": role}
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_lands_on_role_dashboard() {
    for (role, route) in [
        (Role::Admin, "/admin/dashboard"),
        (Role::Faculty, "/faculty/Dashboard"),
        (Role::Student, "/student/dashboard"),
    ] {
        let (server, portal) = common::portal().await;
        mount_login(&server, role.as_str()).await;

        let outcome = auth::login(&portal, "u@uni.edu", "secret", Some(role))
            .await
            .unwrap();
        assert_eq!(outcome.route.path(), route);
        assert_eq!(portal.session.role().unwrap(), role);
    }
}

#[tokio::test]
async fn login_without_role_defaults_to_student() {
    let (server, portal) = common::portal().await;
    mount_login(&server, "student").await;

    let outcome = auth::login(&portal, "s@uni.edu", "secret", None)
        .await
        .unwrap();
    assert_eq!(outcome.route, Route::StudentDashboard);
}

#[tokio::test]
async fn blank_password_never_reaches_server() {
    let (server, portal) = common::portal().await;
    let err = auth::login(&portal, "s@uni.edu", "", None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "Please fill in all required fields: password");
    assert_eq!(common::request_count(&server).await, 0);
}

#[tokio::test]
async fn bad_credentials_surface_server_message() {
    let (server, portal) = common::portal().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let err = auth::login(&portal, "s@uni.edu", "nope", None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(portal.session.session().unwrap().is_none());
}

#[tokio::test]
async fn logout_clears_every_key() {
    let (_server, portal) = common::portal_as(Role::Student).await;
    portal.session.set_academic_year_id("2022").unwrap();

    assert_eq!(auth::logout(&portal).unwrap(), Route::Login);
    let status = auth::status(&portal).unwrap();
    assert!(!status.logged_in);
    assert!(portal.session.academic_year_id().unwrap().is_none());
}
