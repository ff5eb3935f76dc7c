//! End-to-end tests for the login exchange and authenticated fetches,
//! driven against a local mock of the iKnow API.

use iknow_core::api::{ApiClient, ApiError};
use iknow_core::auth::{CredentialStore, UserRole};
use iknow_core::config::LoginShape;
use iknow_core::models::ExamSummary;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fresh_store() -> (tempfile::TempDir, CredentialStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = CredentialStore::new(dir.path().to_path_buf());
    (dir, store)
}

async fn mock_login(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_with_flat_payload_populates_store() {
    let server = MockServer::start().await;
    mock_login(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "token": "A",
            "refreshToken": "B",
            "role": "Professor"
        })),
    )
    .await;

    let (_dir, store) = fresh_store();
    let client = ApiClient::new(server.uri()).unwrap();

    let session = client
        .login(&store, "ana@example.com", "secret")
        .await
        .expect("login should succeed");

    assert_eq!(session.tokens.access_token, "A");
    assert_eq!(session.tokens.refresh_token, "B");
    assert_eq!(session.role, UserRole::Professor);

    assert_eq!(store.access_token().as_deref(), Some("A"));
    assert_eq!(store.refresh_token().as_deref(), Some("B"));
    assert_eq!(store.user_role(), Some(UserRole::Professor));
    assert!(store.is_authenticated());
}

#[tokio::test]
async fn login_sends_the_expected_request_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_partial_json(json!({
            "email": "ana@example.com",
            "password": "secret",
            "GenerateRefreshToken": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "A",
            "refreshToken": "B"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, store) = fresh_store();
    let client = ApiClient::new(server.uri()).unwrap();
    client.login(&store, "ana@example.com", "secret").await.unwrap();
}

#[tokio::test]
async fn login_with_nested_payload_populates_store() {
    let server = MockServer::start().await;
    mock_login(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "tokens": { "accessToken": "A", "refreshToken": "B" },
            "role": "Student"
        })),
    )
    .await;

    let (_dir, store) = fresh_store();
    let client = ApiClient::new(server.uri()).unwrap();

    let session = client.login(&store, "ana@example.com", "secret").await.unwrap();
    assert_eq!(session.role, UserRole::Student);
    assert_eq!(store.access_token().as_deref(), Some("A"));
    assert_eq!(store.refresh_token().as_deref(), Some("B"));
}

#[tokio::test]
async fn configured_flat_shape_rejects_nested_payload() {
    let server = MockServer::start().await;
    mock_login(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "tokens": { "accessToken": "A", "refreshToken": "B" }
        })),
    )
    .await;

    let (_dir, store) = fresh_store();
    let client = ApiClient::new(server.uri())
        .unwrap()
        .with_login_shape(LoginShape::Flat);

    let err = client.login(&store, "ana@example.com", "secret").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ApiError>(),
        Some(ApiError::MissingTokens)
    ));
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn login_without_role_defaults_to_student() {
    let server = MockServer::start().await;
    mock_login(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "token": "A",
            "refreshToken": "B"
        })),
    )
    .await;

    let (_dir, store) = fresh_store();
    let client = ApiClient::new(server.uri()).unwrap();

    let session = client.login(&store, "ana@example.com", "secret").await.unwrap();
    assert_eq!(session.role, UserRole::Student);
    assert_eq!(store.user_role(), Some(UserRole::Student));
}

#[tokio::test]
async fn rejected_login_surfaces_the_response_body() {
    let server = MockServer::start().await;
    mock_login(
        &server,
        ResponseTemplate::new(401).set_body_string("Invalid credentials"),
    )
    .await;

    let (_dir, store) = fresh_store();
    let client = ApiClient::new(server.uri()).unwrap();

    let err = client.login(&store, "ana@example.com", "wrong").await.unwrap_err();
    assert!(err.to_string().contains("Invalid credentials"));
    assert!(!store.is_authenticated());
    assert_eq!(store.refresh_token(), None);
}

#[tokio::test]
async fn rejected_login_with_empty_body_surfaces_the_status() {
    let server = MockServer::start().await;
    mock_login(&server, ResponseTemplate::new(401)).await;

    let (_dir, store) = fresh_store();
    let client = ApiClient::new(server.uri()).unwrap();

    let err = client.login(&store, "ana@example.com", "wrong").await.unwrap_err();
    assert!(err.to_string().contains("401"));
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn tokenless_success_fails_and_leaves_store_unchanged() {
    let server = MockServer::start().await;
    mock_login(&server, ResponseTemplate::new(200).set_body_json(json!({}))).await;

    let (_dir, store) = fresh_store();
    // A prior session must survive the failed exchange untouched.
    store
        .write(
            iknow_core::auth::ACCESS_TOKEN_KEY,
            "stale",
            chrono::Duration::hours(1),
        )
        .unwrap();

    let client = ApiClient::new(server.uri()).unwrap();
    let err = client.login(&store, "ana@example.com", "secret").await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ApiError>(),
        Some(ApiError::MissingTokens)
    ));
    assert_eq!(store.access_token().as_deref(), Some("stale"));
    assert_eq!(store.refresh_token(), None);
}

#[tokio::test]
async fn fetch_user_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/getUser"))
        .and(header("authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "personalInfo": {
                "firstName": "Ana",
                "lastName": "Petrovska",
                "index": "201045"
            }
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap().with_token("T".to_string());
    let profile = client.fetch_user().await.expect("profile fetch should succeed");
    assert_eq!(profile.full_name(), "Ana Petrovska");
}

#[tokio::test]
async fn fetch_passed_subjects_parses_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/getPassedSubjects"))
        .and(header("authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "passedSubjects": [
                {
                    "id": 1, "subjectId": 301, "code": "F18L3W001",
                    "subject": "Web Programming", "credits": 6, "grade": 9,
                    "gradeText": "nine", "date": "15.06.2024",
                    "semester": "6", "professor": "Ivan Ivanov"
                },
                {
                    "id": 2, "subjectId": 302, "code": "F18L3W002",
                    "subject": "Databases", "credits": 6, "grade": 8,
                    "gradeText": "eight", "date": "20.06.2024",
                    "semester": "6", "professor": "Ivan Ivanov"
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap().with_token("T".to_string());
    let subjects = client.fetch_passed_subjects().await.unwrap();
    assert_eq!(subjects.len(), 2);

    let summary = ExamSummary::from_subjects(&subjects);
    assert_eq!(summary.credits_earned, 12);
    assert_eq!(summary.average, 8.5);
}

#[tokio::test]
async fn expired_token_fetch_maps_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/getPassedSubjects"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap().with_token("expired".to_string());
    let err = client.fetch_passed_subjects().await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ApiError>(),
        Some(ApiError::Unauthorized(_))
    ));
}
