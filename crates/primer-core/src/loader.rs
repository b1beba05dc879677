// ── Boot loader ──
//
// Runs once at startup: dataset, then location. Nothing here fails; a
// listings fault is reported in `BootOutcome::load_error` and the built-in
// dataset is used instead. Skipping the fetch (no URL) is not a fault.

use tracing::{info, warn};

use primer_api::FeedClient;

use crate::config::BootConfig;
use crate::convert;
use crate::defaults;
use crate::error::CoreError;
use crate::location;
use crate::model::{Coordinates, DynamicContent, Property};
use crate::store::DataStore;

/// Everything boot resolved, ready to hand to [`crate::Controller::new`].
#[derive(Debug)]
pub struct BootOutcome {
    pub data: DataStore,
    pub location: Coordinates,
    /// Set when the listings feed could not be read and the built-in
    /// dataset was substituted.
    pub load_error: Option<CoreError>,
}

impl BootOutcome {
    /// Built-in dataset and default location, with no error to report.
    pub fn offline() -> Self {
        Self {
            data: DataStore::new(defaults::properties(), Vec::new(), defaults::dynamic_content()),
            location: defaults::LOCATION,
            load_error: None,
        }
    }
}

/// Load the dataset, then resolve the user's location.
pub async fn boot(client: &FeedClient, config: &BootConfig) -> BootOutcome {
    let (listings, content) = tokio::join!(
        load_listings(client, config),
        load_content(client, config)
    );

    let (data, load_error) = match listings {
        Ok(Some((properties, schools))) => {
            info!(properties = properties.len(), "listings loaded");
            (DataStore::new(properties, schools, content), None)
        }
        Ok(None) => {
            info!("no listings feed configured, using built-in dataset");
            (DataStore::new(defaults::properties(), Vec::new(), content), None)
        }
        Err(e) => {
            warn!(error = %e, "listings unavailable, using built-in dataset");
            let data = DataStore::new(defaults::properties(), Vec::new(), content);
            (data, Some(e))
        }
    };

    let location = location::resolve(client, &config.location).await;
    BootOutcome {
        data,
        location,
        load_error,
    }
}

/// `Ok(None)` when no feed is configured; only an attempted fetch can fail.
async fn load_listings(
    client: &FeedClient,
    config: &BootConfig,
) -> Result<Option<(Vec<Property>, Vec<String>)>, CoreError> {
    let Some(url) = config.listings_url.clone() else {
        return Ok(None);
    };
    let doc = client.listings(url).await?;
    Ok(Some(convert::listings(doc)))
}

/// Banner/hero copy. Any failure quietly falls back to the built-ins.
async fn load_content(client: &FeedClient, config: &BootConfig) -> DynamicContent {
    let Some(url) = config.dynamic_url.clone() else {
        return defaults::dynamic_content();
    };
    match client.dynamic_content(url).await {
        Ok(doc) => convert::dynamic_content(doc),
        Err(e) => {
            warn!(error = %e, "dynamic content unavailable, using built-in banners");
            defaults::dynamic_content()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use primer_api::TransportConfig;

    #[test]
    fn offline_boot_uses_builtins_without_error() {
        let client = FeedClient::new(&TransportConfig::default()).unwrap();
        let outcome = tokio_test::block_on(boot(&client, &BootConfig::offline()));

        assert_eq!(outcome.data.properties().len(), 3);
        assert_eq!(outcome.data.content(), &defaults::dynamic_content());
        assert_eq!(outcome.location, defaults::LOCATION);
        assert!(outcome.load_error.is_none());
    }

    #[test]
    fn offline_outcome_has_no_error() {
        let outcome = BootOutcome::offline();
        assert!(outcome.load_error.is_none());
        assert_eq!(outcome.data.properties()[0].id, "prop1");
    }
}
