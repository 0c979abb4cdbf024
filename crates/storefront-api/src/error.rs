use thiserror::Error;

/// Top-level error type for the `storefront-api` crate.
///
/// Covers every failure mode of the two upstream clients: transport,
/// non-2xx statuses, body deserialization, and session expiry.
/// `storefront-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Upstream ────────────────────────────────────────────────────
    /// Non-2xx response from an upstream resource, with the HTTP status.
    #[error("Upstream error (HTTP {status}): {message}")]
    Http { status: u16, message: String },

    /// Session token rejected (HTTP 401). The transport has already
    /// cleared the stored token; the caller must re-authenticate.
    #[error("Session expired -- re-authentication required")]
    SessionExpired,

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Http { status: 404, .. } => true,
            _ => false,
        }
    }

    /// The HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Http { status, .. } => Some(*status),
            Self::SessionExpired => Some(401),
            _ => None,
        }
    }

    /// Returns `true` if the request never produced a response.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect() || e.is_timeout())
    }
}
