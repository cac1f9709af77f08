//! Endpoint behaviour against a mock backend.

use pretty_assertions::assert_eq;
use serde_json::json;
use uniportal_client::student::CourseSelection;
use uniportal_client::{ClientError, PortalClient};
use uniportal_core::entities::{
    ApplicationDecision, Credentials, FeeDecision, NewAcademicYear, Session,
};
use uniportal_core::enums::{ApprovalStatus, Role};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session(role: Role) -> Session {
    Session {
        token: "jwt-token".into(),
        role,
        user_id: "2101".into(),
        name: "Asha".into(),
        student_id: None,
        faculty_id: None,
    }
}

async fn setup() -> (MockServer, PortalClient) {
    let server = MockServer::start().await;
    let client = PortalClient::new(&server.uri()).unwrap();
    (server, client)
}

#[tokio::test]
async fn login_posts_credentials_and_returns_session() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({
            "email": "admin@uni.edu",
            "password": "secret",
            "role": "admin"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "token": "jwt",
            "user": {"id": 1, "name": "Registrar"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = client
        .login(&Credentials {
            email: "admin@uni.edu".into(),
            password: "secret".into(),
            role: Role::Admin,
        })
        .await
        .unwrap();
    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.user_id, "1");
    assert_eq!(session.token, "jwt");
}

#[tokio::test]
async fn admin_routes_send_bearer_and_role() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/students"))
        .and(header("Authorization", "Bearer jwt-token"))
        .and(header("Role", "admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"student_id": "S1", "name": "Asha"}, {"id": 2, "name": "Ravi"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let students = client.list_students(&session(Role::Admin)).await.unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[1].student_id, "2");
}

#[tokio::test]
async fn offerings_use_role_and_student_headers_without_token() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/student/registration/offerings"))
        .and(header("Role", "student"))
        .and(header("StudentId", "2101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"offering_id": 1, "course_id": 10, "course_code": "CS101", "available_seats": 4}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let offerings = client
        .course_offerings(&session(Role::Student), "2101")
        .await
        .unwrap();
    assert_eq!(offerings[0].course_code, "CS101");

    let received = server.received_requests().await.unwrap();
    assert!(received[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn select_course_carries_idempotency_key() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/student/select-course"))
        .and(header("Idempotency-Key", "draft-1-O1"))
        .and(header("StudentId", "2101"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "message": "ok"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ack = client
        .select_course(
            &session(Role::Student),
            &CourseSelection {
                student_id: "2101".into(),
                offering_id: "O1".into(),
                course_id: "C1".into(),
            },
            Some("draft-1-O1"),
        )
        .await
        .unwrap();
    assert_eq!(ack.message.as_deref(), Some("ok"));
}

#[tokio::test]
async fn fee_filter_goes_in_query_with_role_only() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/approval/fee-transactions"))
        .and(query_param("status", "Pending"))
        .and(header("Role", "admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"fee_id": 5, "student_id": "S1", "amount": "45000", "status": "Pending"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let txns = client
        .list_fee_transactions(&session(Role::Admin), Some(ApprovalStatus::Pending))
        .await
        .unwrap();
    assert_eq!(txns[0].amount, 45000.0);
    let received = server.received_requests().await.unwrap();
    assert!(received[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn success_false_is_rejected() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/approval/fee-transactions/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Transaction already processed"
        })))
        .mount(&server)
        .await;

    let err = client
        .decide_fee_transaction(&session(Role::Admin), "5", &FeeDecision::approve(None))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Rejected(_)));
    assert_eq!(err.to_string(), "Transaction already processed");
}

#[tokio::test]
async fn server_error_message_is_surfaced() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/courses/CS101"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"message": "Course has enrolments"})),
        )
        .mount(&server)
        .await;

    let err = client
        .delete_course(&session(Role::Admin), "CS101")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.to_string(), "Course has enrolments");
}

#[tokio::test]
async fn empty_delete_body_counts_as_success() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/faculty/F1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let ack = client
        .delete_faculty(&session(Role::Admin), "F1")
        .await
        .unwrap();
    assert_eq!(ack.success, None);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let client = PortalClient::new("http://127.0.0.1:1").unwrap();
    let err = client
        .list_announcements(&session(Role::Student))
        .await
        .unwrap_err();
    assert!(err.is_network());
    assert_eq!(err.to_string(), "Failed to connect to server");
}

#[tokio::test]
async fn calendar_download_keeps_bytes_and_name() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/academic-calendar/3/download"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Disposition", "attachment; filename=\"cal.pdf\"")
                .set_body_bytes(b"%PDF-1.4".to_vec()),
        )
        .mount(&server)
        .await;

    let download = client
        .download_calendar_entry(&session(Role::Student), "3")
        .await
        .unwrap();
    assert_eq!(download.file_name.as_deref(), Some("cal.pdf"));
    assert_eq!(download.bytes, b"%PDF-1.4");
}

#[tokio::test]
async fn academic_years_are_admin_routes() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/academic-years"))
        .and(header("Role", "admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"academic_year_id": 3, "label": "2025-26", "is_current": 0},
            {"id": "4", "year": "2026-27", "isCurrent": true}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/academic-years"))
        .and(body_json(json!({
            "label": "2027-28",
            "start_date": "2027-07-01",
            "end_date": "2028-05-31",
            "is_current": false
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"success": true, "id": 5})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let admin = session(Role::Admin);
    let years = client.list_academic_years(&admin).await.unwrap();
    assert_eq!(years.len(), 2);
    assert!(years[1].is_current);

    let ack = client
        .create_academic_year(
            &admin,
            &NewAcademicYear {
                label: "2027-28".into(),
                start_date: "2027-07-01".into(),
                end_date: "2028-05-31".into(),
                is_current: false,
            },
        )
        .await
        .unwrap();
    assert_eq!(ack.record_id.as_deref(), Some("5"));
}

#[tokio::test]
async fn advisor_lists_and_decides_applications() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/faculty/F7/applications"))
        .and(header("Authorization", "Bearer jwt-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"application_id": 11, "student_id": 2101, "cpi": "8.4",
             "course_ids": [1, "2"], "status": "Pending"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/faculty/applications/11"))
        .and(body_json(json!({"status": "Rejected", "remarks": "Credit limit"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Application rejected"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let advisor = session(Role::Faculty);
    let apps = client.list_applications(&advisor, "F7").await.unwrap();
    assert_eq!(apps[0].course_ids, vec!["1".to_string(), "2".to_string()]);
    assert_eq!(apps[0].cpi, Some(8.4));

    let ack = client
        .decide_application(
            &advisor,
            "11",
            &ApplicationDecision {
                status: ApprovalStatus::Rejected,
                remarks: Some("Credit limit".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(ack.message_or(""), "Application rejected");
}
