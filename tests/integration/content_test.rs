//! News, seasons, and site configuration over HTTP.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

const PNG_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

async fn create_news(app: &TestApp, token: &str, title: &str, published: bool) -> String {
    let response = app
        .request(
            "POST",
            "/api/news",
            Some(json!({ "title": title, "content": "<p>Body</p>", "is_published": published })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_mutating_routes_require_admin_session() {
    let app = TestApp::new();
    let id = uuid::Uuid::new_v4();

    let cases = [
        ("POST", "/api/news".to_string(), Some(json!({ "title": "t", "content": "c" }))),
        ("PUT", "/api/news".to_string(), Some(json!({ "ids": [id], "is_published": true }))),
        ("DELETE", format!("/api/news?id={id}"), None),
        ("PUT", format!("/api/news/{id}"), Some(json!({ "title": "t" }))),
        ("DELETE", format!("/api/news/{id}"), None),
        ("POST", "/api/seasons".to_string(), Some(json!({ "year": "2024", "name": "n" }))),
        ("PUT", format!("/api/seasons/{id}"), Some(json!({ "year": "2024", "name": "n" }))),
        ("DELETE", format!("/api/seasons/{id}"), None),
        ("PUT", "/api/site-config".to_string(), Some(json!({ "site_name": "x" }))),
    ];

    for (method, path, body) in cases {
        let response = app.request(method, &path, body, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {path}");
    }
}

#[tokio::test]
async fn test_news_lifecycle() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let id = create_news(&app, &token, "Vittoria in casa", true).await;

    let response = app.request("GET", &format!("/api/news/{id}"), None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Vittoria in casa");
    assert_eq!(response.body["is_published"], true);

    let response = app
        .request(
            "PUT",
            &format!("/api/news/{id}"),
            Some(json!({ "title": "Vittoria sofferta" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Vittoria sofferta");
    assert_eq!(response.body["content"], "<p>Body</p>");

    let response = app
        .request(
            "PUT",
            &format!("/api/news/{id}"),
            Some(json!({ "is_published": false })),
            Some(&token),
        )
        .await;
    assert_eq!(response.body["is_published"], false);

    let response = app.request("GET", "/api/news/count", None, None).await;
    assert_eq!(response.body["count"], 1);

    let response = app
        .request("DELETE", &format!("/api/news/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &format!("/api/news/{id}"), None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &format!("/api/news/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_news_validation() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request("POST", "/api/news", Some(json!({ "title": "", "content": "c" })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("VALIDATION_ERROR"));

    let id = create_news(&app, &token, "Titolo", false).await;
    let response = app
        .request(
            "PUT",
            &format!("/api/news/{id}"),
            Some(json!({ "title": "  ", "content": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("GET", "/api/news/not-a-uuid", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("INVALID_ID"));

    let response = app.request("DELETE", "/api/news", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_news_image_is_uploaded() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/news",
            Some(json!({ "title": "Foto", "content": "c", "image": PNG_DATA_URL })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["image"], "https://img.test/clubsite/img1.png");
    assert_eq!(app.uploader.upload_count(), 1);

    let response = app
        .request(
            "POST",
            "/api/news",
            Some(json!({ "title": "Link", "content": "c", "image": "https://example.com/a.jpg" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.body["image"], "https://example.com/a.jpg");
    assert_eq!(app.uploader.upload_count(), 1);
}

#[tokio::test]
async fn test_news_pagination_and_filter() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    for i in 0..8 {
        create_news(&app, &token, &format!("News {i}"), i % 2 == 0).await;
    }

    let response = app.request("GET", "/api/news?page=1&limit=5", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["news"].as_array().unwrap().len(), 5);
    assert_eq!(response.body["pagination"]["total"], 8);
    assert_eq!(response.body["pagination"]["total_pages"], 2);

    let response = app.request("GET", "/api/news?page=0&limit=100", None, None).await;
    assert_eq!(response.body["pagination"]["page"], 1);
    assert_eq!(response.body["pagination"]["limit"], 6);

    let response = app.request("GET", "/api/news?is_published=true&limit=20", None, None).await;
    let news = response.body["news"].as_array().unwrap();
    assert_eq!(news.len(), 4);
    assert!(news.iter().all(|n| n["is_published"] == true));
}

#[tokio::test]
async fn test_news_page_past_the_end_is_empty() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    create_news(&app, &token, "Unica", true).await;

    let response = app
        .request("GET", "/api/news?page=9223372036854775807&limit=20", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["news"].as_array().unwrap().is_empty());
    assert_eq!(response.body["pagination"]["total"], 1);
    assert_eq!(response.body["pagination"]["page"], 9223372036854775807u64);
}

#[tokio::test]
async fn test_bulk_publish_and_delete_by_query() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let a = create_news(&app, &token, "A", false).await;
    let b = create_news(&app, &token, "B", false).await;

    let response = app
        .request(
            "PUT",
            "/api/news",
            Some(json!({ "ids": [a, b], "is_published": true })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["modified"], 2);
    assert_eq!(response.body["success"], true);

    let response = app
        .request("PUT", "/api/news", Some(json!({ "ids": [], "is_published": true })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("DELETE", &format!("/api/news?id={a}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let response = app.request("GET", "/api/news/count", None, None).await;
    assert_eq!(response.body["count"], 1);
}

#[tokio::test]
async fn test_seasons() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let season = json!({
        "year": "2023/2024",
        "name": "Prima squadra",
        "players": [
            { "name": "Marco", "surname": "Rossi", "role": "Portiere", "number": 1, "image": PNG_DATA_URL },
            { "name": "Luca", "surname": "Bianchi", "role": "Attaccante" }
        ]
    });
    let response = app.request("POST", "/api/seasons", Some(season.clone()), Some(&token)).await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let id = response.body["id"].as_str().unwrap().to_string();
    assert_eq!(
        response.body["players"][0]["image"],
        "https://img.test/clubsite/img1.png"
    );

    let response = app.request("POST", "/api/seasons", Some(season), Some(&token)).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), Some("SEASON_EXISTS"));

    let response = app
        .request(
            "POST",
            "/api/seasons",
            Some(json!({ "year": "2024/2025", "name": "Prima squadra" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app.request("GET", "/api/seasons", None, None).await;
    let seasons = response.body["seasons"].as_array().unwrap();
    assert_eq!(seasons.len(), 2);
    assert_eq!(seasons[0]["year"], "2024/2025");
    assert_eq!(seasons[1]["year"], "2023/2024");

    let response = app.request("GET", "/api/seasons/count", None, None).await;
    assert_eq!(response.body["count"], 2);

    let response = app
        .request(
            "PUT",
            &format!("/api/seasons/{id}"),
            Some(json!({ "year": "2023/2024", "name": "Juniores", "players": [] })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Juniores");
    assert_eq!(response.body["players"].as_array().unwrap().len(), 0);

    let response = app
        .request("POST", "/api/seasons", Some(json!({ "year": "", "name": "x" })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("DELETE", &format!("/api/seasons/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &format!("/api/seasons/{id}"), None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_site_config_partial_update() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .request(
            "PUT",
            "/api/site-config",
            Some(json!({
                "live_stream_url": "https://youtube.com/live/abc",
                "live_stream_active": true,
                "logo": PNG_DATA_URL,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["live_stream_active"], true);
    assert_eq!(response.body["logo"], "https://img.test/clubsite/img1.png");

    let response = app.request("GET", "/api/site-config", None, None).await;
    assert_eq!(response.body["site_name"], "FC Borghetto");
    assert_eq!(response.body["live_stream_url"], "https://youtube.com/live/abc");
}

#[tokio::test]
async fn test_health_and_unknown_api_path() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "memory");
    assert_eq!(response.body["media"], "recording");

    let response = app.request("GET", "/api/does-not-exist", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), Some("NOT_FOUND"));
}
