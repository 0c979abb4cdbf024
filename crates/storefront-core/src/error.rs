// ── Core error types ──
//
// User-facing errors from storefront-core. Consumers never see raw
// reqwest errors or JSON parse failures directly; the
// `From<storefront_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants. Display strings double as the
// `error` field of the store and as notification text, so they must
// stay human-readable.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity_type} '{identifier}' not found")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── Transport errors (wrapped, not exposed raw) ──────────────────
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    #[error("Malformed response: {message}")]
    Parse { message: String },

    #[error("Session expired -- please sign in again")]
    SessionExpired,

    // ── Local errors ─────────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Translate an API error for an operation on a known entity,
    /// turning a 404 into a typed not-found.
    pub fn for_entity(entity_type: &str, identifier: &str, err: storefront_api::Error) -> Self {
        if err.is_not_found() {
            Self::NotFound {
                entity_type: entity_type.to_owned(),
                identifier: identifier.to_owned(),
            }
        } else {
            Self::from(err)
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<storefront_api::Error> for CoreError {
    fn from(err: storefront_api::Error) -> Self {
        match err {
            storefront_api::Error::Transport(ref e) => {
                if e.is_connect() || e.is_timeout() {
                    CoreError::Network {
                        message: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            storefront_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            storefront_api::Error::Http { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            storefront_api::Error::SessionExpired => CoreError::SessionExpired,
            storefront_api::Error::Deserialization { message, body: _ } => {
                CoreError::Parse { message }
            }
        }
    }
}
