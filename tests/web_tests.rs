//! Web API tests. The router is served on an ephemeral port with external
//! lookup disabled.

use reqwest::StatusCode;
use serde_json::Value;
use tokio::net::TcpListener;

use bactopedia::external::ExternalSource;
use bactopedia::web::server::{create_router, AppState, MAX_QUERY_LENGTH};
use bactopedia::{BacteriaCatalog, QueryConfig};

async fn spawn_app() -> String {
    let state = AppState {
        catalog: BacteriaCatalog::load_embedded().unwrap(),
        external: ExternalSource::Offline,
        config: QueryConfig::default(),
    };
    let app = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn lookup(base: &str, query: &str) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .get(format!("{base}/api/lookup"))
        .query(&[("q", query)])
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_index_page_has_security_headers() {
    let base = spawn_app().await;
    let response = reqwest::get(format!("{base}/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers.contains_key("referrer-policy"));
    assert!(response.text().await.unwrap().contains("/api/lookup"));
}

#[tokio::test]
async fn test_lookup_local_hit() {
    let base = spawn_app().await;
    let (status, body) = lookup(&base, "golden staph").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "local_hit");
    assert_eq!(body["record"]["display_name"], "Staphylococcus aureus");
    assert_eq!(body["query"], "golden staph");
    assert!(body["processing_time_ms"].is_u64());
}

#[tokio::test]
async fn test_lookup_invalid_and_not_found() {
    let base = spawn_app().await;

    let (_, body) = lookup(&base, "E coli 2").await;
    assert_eq!(body["outcome"], "invalid");
    assert!(body["reason"].as_str().unwrap().contains("numbers"));

    let (_, body) = lookup(&base, "").await;
    assert_eq!(body["outcome"], "invalid");

    let (_, body) = lookup(&base, "Helicobacter pylory").await;
    assert_eq!(body["outcome"], "not_found");
    assert_eq!(body["suggestions"][0], "helicobacter pylori");
}

#[tokio::test]
async fn test_lookup_rejects_long_query() {
    let base = spawn_app().await;
    let long_query = "a".repeat(MAX_QUERY_LENGTH + 1);
    let (status, body) = lookup(&base, &long_query).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "query_too_long");
    assert!(body["details"].is_null());
}

#[tokio::test]
async fn test_catalog_endpoints() {
    let base = spawn_app().await;

    let body: Value = reqwest::get(format!("{base}/api/catalog"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["count"], 9);
    assert_eq!(body["records"][0]["key"], "vibrio cholerae");

    let response = reqwest::get(format!("{base}/api/catalog/Bacillus%20Subtilis"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let record: Value = response.json().await.unwrap();
    assert_eq!(record["key"], "bacillus subtilis");

    let response = reqwest::get(format!("{base}/api/catalog/salmonella"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
