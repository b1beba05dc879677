// ── Runtime boot configuration ──
//
// Where the feeds live and how long boot may wait for them. The TUI builds
// a `BootConfig` from its settings file and hands it in; core never reads
// configuration from disk.

use std::time::Duration;

use url::Url;

/// Published listings feed.
pub const DEFAULT_LISTINGS_URL: &str =
    "https://raw.githubusercontent.com/Uppar-ng/Uppar-ng/main/properties.json";

/// Published banner/hero feed.
pub const DEFAULT_DYNAMIC_URL: &str =
    "https://raw.githubusercontent.com/Uppar-ng/Uppar-ng/main/dynamic.json";

/// Feed locations for the boot loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootConfig {
    /// `None` skips the fetch and boots on the built-in dataset.
    pub listings_url: Option<Url>,
    pub dynamic_url: Option<Url>,
    pub location: LocationConfig,
}

/// IP geolocation lookup. Disabled or unreachable lookups resolve to the
/// built-in coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationConfig {
    pub enabled: bool,
    pub url: Option<Url>,
    pub timeout: Duration,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: None,
            timeout: Duration::from_secs(5),
        }
    }
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            listings_url: Url::parse(DEFAULT_LISTINGS_URL).ok(),
            dynamic_url: Url::parse(DEFAULT_DYNAMIC_URL).ok(),
            location: LocationConfig::default(),
        }
    }
}

impl BootConfig {
    /// No network at all: built-in dataset, default location.
    pub fn offline() -> Self {
        Self {
            listings_url: None,
            dynamic_url: None,
            location: LocationConfig {
                enabled: false,
                ..LocationConfig::default()
            },
        }
    }
}
