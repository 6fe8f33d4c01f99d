//! Admin page guard behavior over real HTTP requests.

use chrono::{Duration, Utc};
use http::StatusCode;

use clubsite_auth::SessionCodec;
use clubsite_entity::user::{NewUser, UserRole};

use crate::helpers::TestApp;

fn login_location(original: &str) -> String {
    format!("/admin/login?callbackUrl={}", urlencoding::encode(original))
}

#[tokio::test]
async fn test_protected_page_without_session_redirects_to_login() {
    let app = TestApp::new();

    for path in ["/admin", "/admin/", "/admin/news", "/admin/news/edit?id=42&tab=image"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(response.location(), Some(login_location(path).as_str()), "{path}");
    }
}

#[tokio::test]
async fn test_protected_page_with_session_is_served() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app.request_with_cookie("/admin/", &token).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/admin/", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_page_with_session_redirects_to_dashboard() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app.request_with_cookie("/admin/login", &token).await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location(), Some("/admin"));
}

#[tokio::test]
async fn test_login_and_initialize_pages_are_open() {
    let app = TestApp::new();

    let response = app.request("GET", "/admin/login/", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/admin/initialize/", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_initialize_page_ignores_session() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app.request_with_cookie("/admin/initialize/", &token).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_public_pages_and_lookalikes_are_open() {
    let app = TestApp::new();

    let response = app.request("GET", "/", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/administrator", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.location().is_none());
}

#[tokio::test]
async fn test_api_is_exempt_from_page_guard() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/news", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("POST", "/api/news", Some(serde_json::json!({})), None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_or_expired_session_redirects() {
    let app = TestApp::new();

    let response = app.request_with_cookie("/admin/news", "not-a-token").await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location(), Some(login_location("/admin/news").as_str()));

    let user = NewUser {
        username: "admin".to_string(),
        password_hash: String::new(),
        role: UserRole::Admin,
    }
    .into_user();
    let codec = SessionCodec::new(&app.config.auth);
    let expired = codec
        .issue_at(&user, Utc::now() - Duration::hours(25))
        .unwrap();

    let response = app.request_with_cookie("/admin/news", &expired.token).await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);

    // An expired session does not bounce the login page to the dashboard.
    let response = app.request_with_cookie("/admin/login/", &expired.token).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::new();
    let user = NewUser {
        username: "admin".to_string(),
        password_hash: String::new(),
        role: UserRole::Admin,
    }
    .into_user();
    let forged = SessionCodec::with_secret(b"someone-else", Duration::hours(24))
        .issue(&user)
        .unwrap();

    let response = app.request_with_cookie("/admin/", &forged.token).await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);

    let response = app
        .request(
            "POST",
            "/api/news",
            Some(serde_json::json!({ "title": "x", "content": "y" })),
            Some(&forged.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_encoded_admin_path_is_still_guarded() {
    let app = TestApp::new();

    let response = app.request("GET", "/%61dmin/news", None, None).await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);

    let response = app.request("GET", "/public/../admin/news", None, None).await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
}
