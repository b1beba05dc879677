// ── Core error types ──
//
// Domain errors from primer-core. Consumers never see HTTP status codes or
// JSON parse failures directly: `From<primer_api::Error>` folds transport
// failures into `DataLoad`. None of these are fatal to a session; callers
// recover with built-in defaults or an inline error view.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Boot ─────────────────────────────────────────────────────────
    #[error("Failed to load listings: {message}")]
    DataLoad { message: String },

    #[error("Location unavailable: {reason}")]
    LocationUnavailable { reason: String },

    // ── Persistence ──────────────────────────────────────────────────
    #[error("Storage error on key {key:?}: {message}")]
    Storage { key: String, message: String },

    // ── View dispatch ────────────────────────────────────────────────
    #[error("Render fault: {message}")]
    Render { message: String },

    // ── User input ───────────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<primer_api::Error> for CoreError {
    fn from(err: primer_api::Error) -> Self {
        let message = match &err {
            primer_api::Error::Timeout { .. } => "request timed out".to_owned(),
            primer_api::Error::Status { status, url } => format!("HTTP {status} from {url}"),
            primer_api::Error::Deserialization { message, .. } => {
                format!("malformed document: {message}")
            }
            primer_api::Error::Transport(e) => e.to_string(),
            primer_api::Error::InvalidUrl(e) => format!("invalid URL: {e}"),
        };
        CoreError::DataLoad { message }
    }
}

impl CoreError {
    pub(crate) fn storage(key: &str, err: impl std::fmt::Display) -> Self {
        CoreError::Storage {
            key: key.to_owned(),
            message: err.to_string(),
        }
    }
}
