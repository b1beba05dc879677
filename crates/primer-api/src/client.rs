// Feed HTTP client
//
// Wraps `reqwest::Client` with status handling and JSON decoding for the
// three remote documents the app consumes at boot. There is no retry: each
// call is a single best-effort GET and the caller decides how to recover.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{DynamicDocument, GeoPosition, ListingsDocument};

/// Raw HTTP client for the listings, dynamic-content and location feeds.
pub struct FeedClient {
    http: reqwest::Client,
    /// Request timeout the client was built with, if we know it.
    timeout: Option<Duration>,
}

impl FeedClient {
    /// Create a new client from a `TransportConfig`.
    pub fn new(transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            timeout: Some(transport.timeout),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http, timeout: None }
    }

    /// Fetch `{ properties, schools }`.
    pub async fn listings(&self, url: Url) -> Result<ListingsDocument, Error> {
        let doc: ListingsDocument = self.get_json(url).await?;
        debug!(
            properties = doc.properties.len(),
            schools = doc.schools.len(),
            "listings fetched"
        );
        Ok(doc)
    }

    /// Fetch `{ banners, hero }`. A `null` document decodes as `None`.
    pub async fn dynamic_content(&self, url: Url) -> Result<Option<DynamicDocument>, Error> {
        let doc: Option<DynamicDocument> = self.get_json(url).await?;
        debug!(
            banners = doc.as_ref().map_or(0, |d| d.banners.len()),
            "dynamic content fetched"
        );
        Ok(doc)
    }

    /// Resolve the caller's approximate position via an IP geolocation
    /// endpoint.
    pub async fn locate(&self, url: Url) -> Result<GeoPosition, Error> {
        self.get_json(url).await
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode a JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await.map_err(|e| self.classify(e))?;
        trace!(bytes = body.len(), "response body received");

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    /// Turn reqwest's timeout flavour into our own variant so callers can
    /// distinguish a slow host from a refused connection. A client handed
    /// in via `with_client` has no known timeout and keeps reqwest's error.
    fn classify(&self, err: reqwest::Error) -> Error {
        match self.timeout {
            Some(timeout) if err.is_timeout() => Error::Timeout {
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            },
            _ => Error::Transport(err),
        }
    }
}
