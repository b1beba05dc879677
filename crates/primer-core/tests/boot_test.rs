#![allow(clippy::unwrap_used)]
// Boot sequence tests against a mock feed host.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use primer_api::FeedClient;
use primer_core::{
    BootConfig, Command, Controller, LocationConfig, ManualDriver, MemoryStore,
    NotificationLevel, Page, boot, defaults,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn url(server: &MockServer, suffix: &str) -> Url {
    Url::parse(&format!("{}{suffix}", server.uri())).unwrap()
}

fn config(server: &MockServer) -> BootConfig {
    BootConfig {
        listings_url: Some(url(server, "/properties.json")),
        dynamic_url: Some(url(server, "/dynamic.json")),
        location: LocationConfig {
            enabled: true,
            url: Some(url(server, "/geo")),
            timeout: Duration::from_millis(200),
        },
    }
}

fn client() -> FeedClient {
    FeedClient::with_client(reqwest::Client::new())
}

async fn mount(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

// ── Dataset ─────────────────────────────────────────────────────────

#[tokio::test]
async fn listings_failure_falls_back_with_one_error() {
    let server = MockServer::start().await;
    mount(&server, "/properties.json", ResponseTemplate::new(500)).await;
    mount(&server, "/dynamic.json", ResponseTemplate::new(500)).await;
    mount(&server, "/geo", ResponseTemplate::new(500)).await;

    let outcome = boot(&client(), &config(&server)).await;
    assert!(outcome.load_error.is_some());

    let ids: Vec<_> = outcome.data.properties().iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, ["prop1", "prop2", "prop_north1"]);
    assert_eq!(outcome.data.content(), &defaults::dynamic_content());
    assert_eq!(outcome.location, defaults::LOCATION);

    let ctrl = Controller::new(outcome, Arc::new(MemoryStore::new()), ManualDriver, "#home");
    let levels: Vec<_> = ctrl.notifications().active().map(|n| n.level).collect();
    assert_eq!(levels, [NotificationLevel::Error]);
}

#[tokio::test]
async fn fetched_listings_with_failed_content_is_silent() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/properties.json",
        ResponseTemplate::new(200).set_body_json(json!({
            "properties": [
                { "id": "a", "title": "Loft", "price": 90000, "school": "UNILAG" },
                { "id": "a", "title": "Dup" },
                { "id": "b", "title": "Flat", "price": 200000 }
            ],
            "schools": ["UNILAG"]
        })),
    )
    .await;
    mount(&server, "/dynamic.json", ResponseTemplate::new(200).set_body_string("{oops")).await;
    mount(
        &server,
        "/geo",
        ResponseTemplate::new(200).set_body_json(json!({ "latitude": 6.5, "longitude": 3.4 })),
    )
    .await;

    let outcome = boot(&client(), &config(&server)).await;
    assert!(outcome.load_error.is_none());
    assert_eq!(outcome.data.properties().len(), 2);
    assert_eq!(outcome.data.schools(), ["UNILAG".to_owned()]);
    assert_eq!(outcome.data.content().banners.len(), 2);
    assert!((outcome.location.lat - 6.5).abs() < f64::EPSILON);

    let mut ctrl = Controller::new(outcome, Arc::new(MemoryStore::new()), ManualDriver, "#browse");
    assert!(ctrl.notifications().is_empty());
    ctrl.dispatch(Command::SetMaxPrice(100_000));
    assert_eq!(ctrl.page(), Page::Browse);
}

// ── Location ────────────────────────────────────────────────────────

#[tokio::test]
async fn slow_location_lookup_uses_default() {
    let server = MockServer::start().await;
    mount(&server, "/properties.json", ResponseTemplate::new(200).set_body_json(json!({}))).await;
    mount(&server, "/dynamic.json", ResponseTemplate::new(200).set_body_string("null")).await;
    mount(
        &server,
        "/geo",
        ResponseTemplate::new(200)
            .set_body_json(json!({ "latitude": 6.5, "longitude": 3.4 }))
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let outcome = boot(&client(), &config(&server)).await;
    assert_eq!(outcome.location, defaults::LOCATION);
    assert!(outcome.data.properties().is_empty());
    assert!(outcome.load_error.is_none());
}

#[tokio::test]
async fn offline_config_never_touches_the_network() {
    let outcome = boot(&client(), &BootConfig::offline()).await;
    assert!(outcome.load_error.is_none());
    assert_eq!(outcome.data.properties().len(), 3);
    assert_eq!(outcome.location, defaults::LOCATION);

    // skipping the feed is not a failure, so nothing is announced
    let ctrl = Controller::new(outcome, Arc::new(MemoryStore::new()), ManualDriver, "#home");
    assert_eq!(ctrl.notifications().active().count(), 0);
}
