//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use clubsite_api::AppState;
use clubsite_core::config::{AppConfig, DatabaseProvider};
use clubsite_core::result::AppResult;
use clubsite_core::traits::media::{ImageUploader, UploadedImage};
use clubsite_database::Stores;
use clubsite_service::MediaService;

/// Setup key configured for every test app.
pub const SETUP_KEY: &str = "sk_test";
/// Administrator created by [`TestApp::admin_token`].
pub const ADMIN_USERNAME: &str = "admin";
/// Password of [`ADMIN_USERNAME`].
pub const ADMIN_PASSWORD: &str = "password123";

/// Uploader that "hosts" images under a fake domain.
#[derive(Debug, Default)]
pub struct RecordingUploader {
    uploads: AtomicUsize,
}

impl RecordingUploader {
    /// Number of uploads performed.
    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageUploader for RecordingUploader {
    fn provider_name(&self) -> &str {
        "recording"
    }

    async fn upload(&self, _data_url: &str) -> AppResult<UploadedImage> {
        let n = self.uploads.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(UploadedImage {
            url: format!("https://img.test/clubsite/img{n}.png"),
            public_id: format!("clubsite/img{n}"),
        })
    }

    async fn delete(&self, _public_id: &str) -> AppResult<()> {
        Ok(())
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Image host double
    pub uploader: Arc<RecordingUploader>,
}

impl TestApp {
    /// Create a new test application over empty in-memory stores
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.session_secret = "integration-test-secret".to_string();
        config.setup.setup_key = SETUP_KEY.to_string();
        config.database.provider = DatabaseProvider::Memory;
        config.server.static_dir = "tests/fixtures/public".to_string();
        config.validate().expect("test config should be valid");

        let uploader = Arc::new(RecordingUploader::default());
        let media = MediaService::new(Arc::clone(&uploader) as Arc<dyn ImageUploader>);

        let state = AppState::new(config.clone(), Stores::memory(), media, None)
            .expect("Failed to build app state");
        let router = clubsite_api::build_app(state);

        Self {
            router,
            config,
            uploader,
        }
    }

    /// Create the first administrator through the setup endpoint
    pub async fn bootstrap(&self, username: &str, password: &str) -> TestResponse {
        self.send(
            "POST",
            "/api/setup",
            Some(serde_json::json!({ "username": username, "password": password })),
            &[("x-setup-key", SETUP_KEY)],
        )
        .await
    }

    /// Login and return the session token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "username": username, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Bootstrap the default administrator and return a session token
    pub async fn admin_token(&self) -> String {
        let response = self.bootstrap(ADMIN_USERNAME, ADMIN_PASSWORD).await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        self.login(ADMIN_USERNAME, ADMIN_PASSWORD).await
    }

    /// Make a JSON request, optionally with a Bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let auth = token.map(|t| format!("Bearer {t}"));
        let headers: Vec<(&str, &str)> = auth
            .as_deref()
            .map(|a| vec![("authorization", a)])
            .unwrap_or_default();
        self.send(method, path, body, &headers).await
    }

    /// Make a request with the session cookie set
    pub async fn request_with_cookie(&self, path: &str, token: &str) -> TestResponse {
        let cookie = format!("clubsite_session={token}");
        self.send("GET", path, None, &[("cookie", cookie.as_str())])
            .await
    }

    /// Make a request with arbitrary headers
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(http::header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// The first `Set-Cookie` header.
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(http::header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
    }

    /// The `error` code of an error body.
    pub fn error_code(&self) -> Option<&str> {
        self.body.get("error").and_then(|v| v.as_str())
    }
}
