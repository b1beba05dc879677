//! Configuration for the Primer terminal client.
//!
//! TOML settings file plus `PRIMER_` environment overrides, and the
//! translation to `primer_core::BootConfig`. Core never reads this file;
//! the binary loads it and hands the result in.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use primer_core::config::{DEFAULT_DYNAMIC_URL, DEFAULT_LISTINGS_URL};
use primer_core::{BootConfig, LocationConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataSection,

    #[serde(default)]
    pub location: LocationSection,

    #[serde(default)]
    pub storage: StorageSection,
}

/// Remote feeds. An empty URL disables that fetch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DataSection {
    #[serde(default = "default_listings_url")]
    pub listings_url: String,

    #[serde(default = "default_dynamic_url")]
    pub dynamic_url: String,

    /// HTTP timeout for the feed requests.
    #[serde(default = "default_data_timeout")]
    pub timeout_secs: u64,
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            listings_url: default_listings_url(),
            dynamic_url: default_dynamic_url(),
            timeout_secs: default_data_timeout(),
        }
    }
}

fn default_listings_url() -> String {
    DEFAULT_LISTINGS_URL.into()
}
fn default_dynamic_url() -> String {
    DEFAULT_DYNAMIC_URL.into()
}
fn default_data_timeout() -> u64 {
    15
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocationSection {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// IP geolocation endpoint. Unset means the built-in coordinate.
    pub url: Option<String>,

    #[serde(default = "default_location_timeout")]
    pub timeout_secs: u64,
}

impl Default for LocationSection {
    fn default() -> Self {
        Self {
            enabled: true,
            url: None,
            timeout_secs: default_location_timeout(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_location_timeout() -> u64 {
    5
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageSection {
    /// Saved-state file. Defaults to `storage.json` in the data dir.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Where favorites, bookings, profile and theme are kept.
    pub fn storage_path(&self) -> PathBuf {
        self.storage.path.clone().unwrap_or_else(default_storage_path)
    }

    /// HTTP timeout for the listings and content feeds.
    pub fn data_timeout(&self) -> Duration {
        Duration::from_secs(self.data.timeout_secs)
    }

    /// Translate to the boot loader's settings. Blank URLs disable the
    /// corresponding fetch; malformed ones are rejected.
    pub fn to_boot_config(&self) -> Result<BootConfig, ConfigError> {
        Ok(BootConfig {
            listings_url: parse_optional_url("data.listings_url", &self.data.listings_url)?,
            dynamic_url: parse_optional_url("data.dynamic_url", &self.data.dynamic_url)?,
            location: LocationConfig {
                enabled: self.location.enabled,
                url: match self.location.url.as_deref() {
                    Some(raw) => parse_optional_url("location.url", raw)?,
                    None => None,
                },
                timeout: Duration::from_secs(self.location.timeout_secs),
            },
        })
    }
}

fn parse_optional_url(field: &str, raw: &str) -> Result<Option<Url>, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|e| ConfigError::Validation {
        field: field.into(),
        reason: format!("invalid URL {raw:?}: {e}"),
    })
}

// ── Paths ───────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("ng", "primer", "primer")
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs().map_or_else(
        || home_fallback(".config").join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Default location of the saved-state file.
pub fn default_storage_path() -> PathBuf {
    project_dirs().map_or_else(
        || home_fallback(".local/share").join("storage.json"),
        |dirs| dirs.data_dir().join("storage.json"),
    )
}

fn home_fallback(base: &str) -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(base);
    p.push("primer");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file path, still honoring `PRIMER_` overrides.
///
/// Nested keys use a double underscore: `PRIMER_DATA__TIMEOUT_SECS=30`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("PRIMER_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file is missing or broken.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        Jail::expect_with(|jail| {
            let cfg = load_config_from(&jail.directory().join("absent.toml")).unwrap();
            assert_eq!(cfg, Config::default());
            assert_eq!(cfg.data.timeout_secs, 15);
            assert_eq!(cfg.location.timeout_secs, 5);
            assert!(cfg.location.enabled);
            Ok(())
        });
    }

    #[test]
    fn file_values_override_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [data]
                listings_url = "http://localhost:8080/properties.json"

                [location]
                enabled = false

                [storage]
                path = "/tmp/primer-state.json"
                "#,
            )?;
            let cfg = load_config_from(&jail.directory().join("config.toml")).unwrap();
            assert_eq!(cfg.data.listings_url, "http://localhost:8080/properties.json");
            assert_eq!(cfg.data.dynamic_url, DEFAULT_DYNAMIC_URL);
            assert!(!cfg.location.enabled);
            assert_eq!(cfg.storage_path(), PathBuf::from("/tmp/primer-state.json"));
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[data]\ntimeout_secs = 20\n")?;
            jail.set_env("PRIMER_DATA__TIMEOUT_SECS", "45");
            jail.set_env("PRIMER_LOCATION__URL", "http://geo.test/json");
            let cfg = load_config_from(&jail.directory().join("config.toml")).unwrap();
            assert_eq!(cfg.data_timeout(), Duration::from_secs(45));
            assert_eq!(cfg.location.url.as_deref(), Some("http://geo.test/json"));
            Ok(())
        });
    }

    #[test]
    fn blank_urls_disable_fetches() {
        let mut cfg = Config::default();
        cfg.data.listings_url = "  ".into();
        cfg.data.dynamic_url = String::new();
        let boot = cfg.to_boot_config().unwrap();
        assert_eq!(boot.listings_url, None);
        assert_eq!(boot.dynamic_url, None);
        assert_eq!(boot.location.timeout, Duration::from_secs(5));
    }

    #[test]
    fn default_config_matches_default_boot() {
        let boot = Config::default().to_boot_config().unwrap();
        assert_eq!(boot, BootConfig::default());
    }

    #[test]
    fn malformed_url_is_rejected() {
        let mut cfg = Config::default();
        cfg.location.url = Some("not a url".into());
        let err = cfg.to_boot_config().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation { ref field, .. } if field == "location.url"),
            "got {err:?}"
        );
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = Config::default();
        cfg.location.url = Some("http://geo.test/json".into());
        cfg.storage.path = Some(dir.path().join("state.json"));

        save_config_to(&cfg, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, cfg);
    }
}
