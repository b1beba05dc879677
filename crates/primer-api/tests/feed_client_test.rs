#![allow(clippy::unwrap_used)]
// Integration tests for `FeedClient` using wiremock.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use primer_api::{Error, FeedClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, FeedClient) {
    let server = MockServer::start().await;
    let client = FeedClient::with_client(reqwest::Client::new());
    (server, client)
}

fn url(server: &MockServer, suffix: &str) -> Url {
    Url::parse(&format!("{}{suffix}", server.uri())).unwrap()
}

// ── Listings ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_listings_success() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/properties.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": [{
                "id": "prop1",
                "title": "Modern Studio Apartment",
                "school": "Kaduna State University",
                "price": 120000,
                "coordinates": [6.5244, 3.3792],
                "features": [{ "icon": "bed", "label": "1 Bed" }],
                "isNew": true
            }],
            "schools": ["Kaduna State University"]
        })))
        .mount(&server)
        .await;

    let doc = client.listings(url(&server, "/properties.json")).await.unwrap();

    assert_eq!(doc.properties.len(), 1);
    let prop = &doc.properties[0];
    assert_eq!(prop.id, "prop1");
    assert_eq!(prop.price, Some(120_000));
    assert!(prop.is_new);
    assert_eq!(prop.features[0].label, "1 Bed");
    assert_eq!(doc.schools, vec!["Kaduna State University".to_owned()]);
}

#[tokio::test]
async fn test_listings_missing_fields_degrade_to_empty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/properties.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "properties": null })))
        .mount(&server)
        .await;

    let doc = client.listings(url(&server, "/properties.json")).await.unwrap();
    assert!(doc.properties.is_empty());
    assert!(doc.schools.is_empty());
}

#[tokio::test]
async fn test_listings_http_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/properties.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client.listings(url(&server, "/properties.json")).await;
    let err = result.unwrap_err();
    assert!(err.is_not_found(), "expected 404, got: {err:?}");
}

#[tokio::test]
async fn test_listings_invalid_json() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/properties.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client.listings(url(&server, "/properties.json")).await;
    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_listings_timeout() {
    let server = MockServer::start().await;
    let transport = TransportConfig::default().with_timeout(Duration::from_millis(100));
    let client = FeedClient::new(&transport).unwrap();

    Mock::given(method("GET"))
        .and(path("/properties.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let result = client.listings(url(&server, "/properties.json")).await;
    let err = result.unwrap_err();
    assert!(err.is_transient(), "expected transient error, got: {err:?}");
    assert!(
        matches!(err, Error::Timeout { timeout_ms: 100 }),
        "expected configured timeout, got: {err:?}"
    );
    assert_eq!(err.to_string(), "Request timed out after 100ms");
}

// ── Dynamic content ─────────────────────────────────────────────────

#[tokio::test]
async fn test_dynamic_content_success() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/dynamic.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "banners": [
                { "id": 1, "icon": "fa-home", "title": "Find Your Perfect Home", "description": "Browse" },
                { "id": 2, "title": "24/7 Electricity", "description": "Power" }
            ],
            "hero": { "title": "Hello", "subtitle": "World" }
        })))
        .mount(&server)
        .await;

    let doc = client
        .dynamic_content(url(&server, "/dynamic.json"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(doc.banners.len(), 2);
    assert_eq!(doc.banners[0].id, "1");
    assert_eq!(doc.banners[1].icon, None);
    assert_eq!(doc.hero.unwrap().title.as_deref(), Some("Hello"));
}

#[tokio::test]
async fn test_dynamic_content_null_document() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/dynamic.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let doc = client
        .dynamic_content(url(&server, "/dynamic.json"))
        .await
        .unwrap();
    assert!(doc.is_none());
}

// ── Location ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_locate_success() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "203.0.113.9",
            "latitude": 6.4541,
            "longitude": 3.3947
        })))
        .mount(&server)
        .await;

    let pos = client.locate(url(&server, "/json/")).await.unwrap();
    assert!((pos.latitude - 6.4541).abs() < f64::EPSILON);
    assert!((pos.longitude - 3.3947).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_locate_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client.locate(url(&server, "/json/")).await;
    assert!(
        matches!(result, Err(Error::Status { status: 503, .. })),
        "expected Status 503, got: {result:?}"
    );
}
