//! HTTP-contract tests for the API client, against a mock backend
//!
//! These pin the parts the rest of the console relies on: bearer-header
//! injection, the uniform status→error mapping (401 especially), envelope
//! unwrapping, and the server-authoritative toggle round trip.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]

use lms_client::ApiClient;
use lms_core::Error;
use lms_core::types::{CourseUpdate, Timeframe, ToggleActive};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-bearer-token";

async fn mock_server() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(server.uri());
    (server, client)
}

#[tokio::test]
async fn login_success_returns_token_and_identity() {
    let (server, client) = mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({
            "email": "admin@example.com",
            "password": "hunter22"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "token": "fresh-token",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "admin@example.com",
                "role": "admin"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let data = client.login("admin@example.com", "hunter22").await.unwrap();
    assert_eq!(data.token, "fresh-token");
    assert_eq!(data.first_name, "Ada");
}

#[tokio::test]
async fn login_rejection_surfaces_backend_message_verbatim() {
    let (server, client) = mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Unauthorized: Invalid credentials"
        })))
        .mount(&server)
        .await;

    let err = client.login("a@b.com", "wrongpass").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Unauthorized: Invalid credentials");
}

#[tokio::test]
async fn authenticated_get_sends_bearer_header() {
    let (server, client) = mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/admin/users/instructors"))
        .and(header("Authorization", format!("Bearer {TOKEN}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "_id": "665f1a2b3c4d5e6f78901234",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "isActive": true
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let instructors = client.list_instructors(TOKEN, None).await.unwrap();
    assert_eq!(instructors.len(), 1);
    assert_eq!(instructors[0].full_name(), "Ada Lovelace");
}

#[tokio::test]
async fn any_401_maps_to_unauthorized() {
    let (server, client) = mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/admin/users/students"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Unauthorized: token expired"
        })))
        .mount(&server)
        .await;

    let err = client.list_students(TOKEN, None).await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized(_)));
    assert_eq!(err.user_message(), "Unauthorized: token expired");
}

#[tokio::test]
async fn toggle_returns_server_value_not_requested_value() {
    let (server, client) = mock_server().await;

    // Request asks for `true`; the server (authoritatively) answers `false`.
    Mock::given(method("PATCH"))
        .and(path(
            "/api/v1/admin/users/instructors/665f1a2b3c4d5e6f78901234/toggle-active",
        ))
        .and(body_json(ToggleActive { is_active: true }))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "isActive": false }
        })))
        .mount(&server)
        .await;

    let confirmed = client
        .toggle_instructor_active(TOKEN, "665f1a2b3c4d5e6f78901234", true)
        .await
        .unwrap();
    assert!(!confirmed);
}

#[tokio::test]
async fn duplicate_email_conflict_is_rewritten() {
    let (server, client) = mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/admin/users/students"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "success": false,
            "message": ""
        })))
        .mount(&server)
        .await;

    let payload: lms_core::types::NewStudent = serde_json::from_value(json!({
        "firstName": "Sam",
        "lastName": "Park",
        "email": "sam@example.com",
        "password": "secret1",
        "isActive": true,
        "role": "student",
        "isVerified": true
    }))
    .unwrap();

    let err = client.create_student(TOKEN, &payload).await.unwrap_err();
    assert!(matches!(err, Error::Conflict { .. }));
    assert_eq!(err.user_message(), "This email is already registered");
}

#[tokio::test]
async fn success_false_on_http_200_is_an_error() {
    let (server, client) = mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/admin/analytics/total-enrollments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Aggregation temporarily unavailable"
        })))
        .mount(&server)
        .await;

    let err = client.total_enrollments(TOKEN).await.unwrap_err();
    assert_eq!(err.user_message(), "Aggregation temporarily unavailable");
}

#[tokio::test]
async fn revenue_passes_timeframe_query() {
    let (server, client) = mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/admin/analytics/revenue"))
        .and(query_param("timeframe", "month"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "totalRevenue": 4200.0,
                "breakdown": [
                    { "period": "May 2025", "amount": 1200.0 },
                    { "period": "Jun 2025", "amount": 3000.0 }
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let report = client.revenue(TOKEN, Timeframe::Month).await.unwrap();
    assert!((report.total_revenue - 4200.0).abs() < f64::EPSILON);
    assert_eq!(report.breakdown.len(), 2);
}

#[tokio::test]
async fn contacts_endpoint_returns_bare_array() {
    let (server, client) = mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "_id": "0123456789abcdef01234567",
                "name": "Pat",
                "email": "pat@example.com",
                "subject": "Refund",
                "query": "Please refund my course",
                "type": "billing"
            }
        ])))
        .mount(&server)
        .await;

    let contacts = client.contacts(TOKEN).await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].kind, "billing");
}

#[tokio::test]
async fn ticket_download_rejects_non_pdf_bodies() {
    let (server, client) = mock_server().await;

    Mock::given(method("GET"))
        .and(path(
            "/api/v1/admin/tickets/0123456789abcdef01234567/download",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string("<html>not a pdf</html>"),
        )
        .mount(&server)
        .await;

    let err = client
        .download_ticket(TOKEN, "0123456789abcdef01234567")
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Server did not return a PDF file");
}

#[tokio::test]
async fn ticket_download_returns_pdf_bytes() {
    let (server, client) = mock_server().await;

    Mock::given(method("GET"))
        .and(path(
            "/api/v1/admin/tickets/0123456789abcdef01234567/download",
        ))
        .and(header("Accept", "application/pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/pdf")
                .set_body_bytes(b"%PDF-1.4 fake".to_vec()),
        )
        .mount(&server)
        .await;

    let bytes = client
        .download_ticket(TOKEN, "0123456789abcdef01234567")
        .await
        .unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn tickets_list_carries_total() {
    let (server, client) = mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/admin/tickets"))
        .and(query_param("startDate", "2025-05-01"))
        .and(query_param("endDate", "2025-05-21"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "total": 14,
            "data": [{
                "_id": "0123456789abcdef01234567",
                "user": { "firstName": "Kai", "lastName": "Watts" },
                "category": "billing",
                "status": "open"
            }]
        })))
        .mount(&server)
        .await;

    let window = Some((
        chrono::NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2025, 5, 21).unwrap(),
    ));
    let page = client.list_tickets(TOKEN, window).await.unwrap();
    assert_eq!(page.total, 14);
    assert_eq!(page.tickets.len(), 1);
}

#[tokio::test]
async fn course_update_round_trip() {
    let (server, client) = mock_server().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/admin/courses/0123456789abcdef01234567"))
        .and(body_json(json!({ "title": "Rust, revisited" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "_id": "0123456789abcdef01234567",
                "title": "Rust, revisited",
                "category": "Programming",
                "language": "English",
                "price": 99.0,
                "status": "draft"
            }
        })))
        .mount(&server)
        .await;

    let update = CourseUpdate {
        title: Some("Rust, revisited".to_string()),
        ..CourseUpdate::default()
    };
    let course = client
        .update_course(TOKEN, "0123456789abcdef01234567", &update)
        .await
        .unwrap();
    assert_eq!(course.title, "Rust, revisited");
}

#[tokio::test]
async fn connection_failure_maps_to_network_error() {
    // Nothing listens on this port; the connection is refused immediately.
    let client = ApiClient::new("http://127.0.0.1:9");

    let err = client.me(TOKEN).await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
    assert_eq!(
        err.user_message(),
        "Network error: Unable to connect to the server"
    );
}
