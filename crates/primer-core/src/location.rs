// Best-effort user position. Every failure path, including a slow lookup,
// resolves to the built-in coordinate without surfacing anything.

use tracing::{debug, warn};

use primer_api::FeedClient;

use crate::config::LocationConfig;
use crate::defaults;
use crate::error::CoreError;
use crate::model::Coordinates;

/// Look up the user's position, bounded by `config.timeout`.
pub async fn resolve(client: &FeedClient, config: &LocationConfig) -> Coordinates {
    match lookup(client, config).await {
        Ok(position) => {
            debug!(lat = position.lat, lng = position.lng, "user location resolved");
            position
        }
        Err(e) => {
            warn!(error = %e, "using default location");
            defaults::LOCATION
        }
    }
}

async fn lookup(client: &FeedClient, config: &LocationConfig) -> Result<Coordinates, CoreError> {
    if !config.enabled {
        return Err(CoreError::LocationUnavailable {
            reason: "lookup disabled".into(),
        });
    }
    let Some(url) = config.url.clone() else {
        return Err(CoreError::LocationUnavailable {
            reason: "no lookup endpoint configured".into(),
        });
    };

    let position = tokio::time::timeout(config.timeout, client.locate(url))
        .await
        .map_err(|_| CoreError::LocationUnavailable {
            reason: format!("no answer within {}s", config.timeout.as_secs()),
        })?
        .map_err(|e| CoreError::LocationUnavailable {
            reason: e.to_string(),
        })?;

    let coords = Coordinates {
        lat: position.latitude,
        lng: position.longitude,
    };
    if valid(coords) {
        Ok(coords)
    } else {
        Err(CoreError::LocationUnavailable {
            reason: format!("out-of-range position {}, {}", coords.lat, coords.lng),
        })
    }
}

fn valid(c: Coordinates) -> bool {
    c.lat.is_finite() && c.lng.is_finite() && c.lat.abs() <= 90.0 && c.lng.abs() <= 180.0
}
