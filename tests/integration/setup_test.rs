//! First-run setup: key verification, admin bootstrap, default seeding.

use http::StatusCode;

use crate::helpers::{ADMIN_PASSWORD, ADMIN_USERNAME, SETUP_KEY, TestApp};

#[tokio::test]
async fn test_verify_setup_key() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/setup/verify",
            Some(serde_json::json!({ "setup_key": SETUP_KEY })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["valid"], true);

    let response = app
        .request(
            "POST",
            "/api/setup/verify",
            Some(serde_json::json!({ "setup_key": "wrong" })),
            None,
        )
        .await;
    assert_eq!(response.body["valid"], false);
}

#[tokio::test]
async fn test_bootstrap_then_login() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/setup", None, None).await;
    assert_eq!(response.body["initialized"], false);

    let response = app.bootstrap(ADMIN_USERNAME, ADMIN_PASSWORD).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert!(response.body["user_id"].is_string());

    let response = app.request("GET", "/api/setup", None, None).await;
    assert_eq!(response.body["initialized"], true);

    let token = app.login(ADMIN_USERNAME, ADMIN_PASSWORD).await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_second_bootstrap_is_rejected() {
    let app = TestApp::new();
    app.bootstrap(ADMIN_USERNAME, ADMIN_PASSWORD).await;

    let response = app.bootstrap("other", "password456").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), Some("ALREADY_INITIALIZED"));

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": "other", "password": "password456" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_bootstrap_wrong_key() {
    let app = TestApp::new();

    let body = serde_json::json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD });
    let response = app
        .send("POST", "/api/setup", Some(body.clone()), &[("x-setup-key", "wrong")])
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("UNAUTHORIZED"));

    let response = app.send("POST", "/api/setup", Some(body), &[]).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_key_is_checked_before_admin_existence() {
    let app = TestApp::new();
    app.bootstrap(ADMIN_USERNAME, ADMIN_PASSWORD).await;

    let response = app
        .send(
            "POST",
            "/api/setup",
            Some(serde_json::json!({ "username": "x", "password": "password456" })),
            &[("x-setup-key", "wrong")],
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_bootstrap_validation() {
    let app = TestApp::new();

    let response = app.bootstrap("", ADMIN_PASSWORD).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("MISSING_FIELDS"));

    let response = app.bootstrap(ADMIN_USERNAME, "short").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("WEAK_PASSWORD"));

    let response = app.request("GET", "/api/setup", None, None).await;
    assert_eq!(response.body["initialized"], false);
}

#[tokio::test]
async fn test_bootstrap_seeds_site_config() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/site-config", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    app.bootstrap(ADMIN_USERNAME, ADMIN_PASSWORD).await;

    let response = app.request("GET", "/api/site-config", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["site_name"], "FC Borghetto");
}

#[tokio::test]
async fn test_initialize_endpoint() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/initialize?setup_key=wrong", None, None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.request("GET", "/api/initialize", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let path = format!("/api/initialize?setup_key={SETUP_KEY}");
    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["created"], true);

    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.body["created"], false);

    let response = app.request("GET", "/api/site-config", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}
