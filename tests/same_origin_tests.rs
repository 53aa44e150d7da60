//! Same-origin backend configuration
//!
//! With an empty `BACKEND_URL` the API base is the site's own origin. This
//! file runs as its own test binary so the global metrics only count the
//! requests made here.

use serde_json::{json, Value};
use std::time::Duration;
use taltos_site::{config::Config, server};

// ==================== Test Helpers ====================

/// Start the site with its API base pointing at itself
async fn start_self_backed_site() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let origin = format!("http://{}", listener.local_addr().expect("addr"));

    let config = Config {
        environment: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        backend_url: String::new(),
        public_origin: origin.clone(),
        request_timeout_secs: 5,
        news_limit: 10,
    };
    assert_eq!(config.api_base_url(), origin);

    let state = server::AppState::new(config).expect("state");
    tokio::spawn(async move {
        axum::serve(listener, server::app(state))
            .await
            .expect("server");
    });

    origin
}

fn http() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client")
}

// ==================== Request Count Tests ====================

#[tokio::test]
async fn test_home_page_against_own_origin_makes_bounded_calls() {
    let site = start_self_backed_site().await;

    let response = tokio::time::timeout(
        Duration::from_secs(3),
        http().get(format!("{}/en", site)).send(),
    )
    .await
    .expect("home page should answer before the backend timeout")
    .expect("request");

    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("body");
    assert!(body.contains("This content is currently unavailable."));

    // API paths on the site are plain 404s, not the language redirect
    let api = http()
        .get(format!("{}/api/news?lang=en&limit=4", site))
        .send()
        .await
        .expect("request");
    assert_eq!(api.status(), 404);

    let metrics: Value = http()
        .get(format!("{}/metrics", site))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json");

    // One rendered page, one failed fetch each for news and reviews
    assert_eq!(metrics["page_views"], json!(1));
    assert_eq!(metrics["content_fetch_failures"], json!(2));
}
