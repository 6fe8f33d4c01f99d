//! Integration tests for the login flow and session endpoints.

use http::StatusCode;

use crate::helpers::{ADMIN_PASSWORD, ADMIN_USERNAME, TestApp};

#[tokio::test]
async fn test_login_success_sets_session_cookie() {
    let app = TestApp::new();
    app.bootstrap(ADMIN_USERNAME, ADMIN_PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": ADMIN_USERNAME,
                "password": ADMIN_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert!(response.body["expires_at"].is_string());
    assert_eq!(response.body["user"]["username"], ADMIN_USERNAME);
    assert_eq!(response.body["user"]["role"], "admin");
    assert!(response.body["user"].get("password_hash").is_none());

    let cookie = response.set_cookie().expect("login should set a cookie");
    assert!(cookie.starts_with(&format!("clubsite_session={token}")));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_wrong_password_and_unknown_user_look_the_same() {
    let app = TestApp::new();
    app.bootstrap(ADMIN_USERNAME, ADMIN_PASSWORD).await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": ADMIN_USERNAME, "password": "wrongpass" })),
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": "nobody", "password": "wrongpass" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.error_code(), Some("INVALID_CREDENTIALS"));
    assert_eq!(wrong_password.status, unknown_user.status);
    assert_eq!(wrong_password.body, unknown_user.body);
    assert!(wrong_password.set_cookie().is_none());
}

#[tokio::test]
async fn test_username_is_case_sensitive() {
    let app = TestApp::new();
    app.bootstrap(ADMIN_USERNAME, ADMIN_PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": "ADMIN", "password": ADMIN_PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_credentials_are_invalid_credentials() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/auth/login", Some(serde_json::json!({})), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("INVALID_CREDENTIALS"));
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .send("POST", "/api/auth/login", None, &[])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("INVALID_BODY"));
}

#[tokio::test]
async fn test_session_endpoint() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/auth/session", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["authenticated"], false);
    assert!(response.body.get("session").is_none());

    let token = app.admin_token().await;

    let response = app.request("GET", "/api/auth/session", None, Some(&token)).await;
    assert_eq!(response.body["authenticated"], true);
    assert_eq!(response.body["session"]["username"], ADMIN_USERNAME);
    assert_eq!(response.body["session"]["role"], "admin");

    let response = app.request_with_cookie("/api/auth/session", &token).await;
    assert_eq!(response.body["authenticated"], true);

    let response = app
        .request("GET", "/api/auth/session", None, Some("garbage"))
        .await;
    assert_eq!(response.body["authenticated"], false);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let cookie = format!("clubsite_session={token}");
    let response = app
        .send("POST", "/api/auth/logout", None, &[("cookie", cookie.as_str())])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let set_cookie = response.set_cookie().expect("logout should clear the cookie");
    assert!(set_cookie.starts_with("clubsite_session=;"));
    assert!(set_cookie.contains("Max-Age=0"));
}
