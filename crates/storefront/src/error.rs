//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use storefront_core::CoreError;

/// Exit codes for process termination.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the upstream API")]
    #[diagnostic(
        code(storefront::connection_failed),
        help(
            "Check your network connection and the configured base URLs.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { reason: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Session expired")]
    #[diagnostic(
        code(storefront::session_expired),
        help("Provide a fresh token via --api-token or STOREFRONT_API_TOKEN.")
    )]
    SessionExpired,

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(storefront::not_found),
        help("Run: storefront {list_command} to see available entries")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error: {message}")]
    #[diagnostic(code(storefront::api_error))]
    Api {
        message: String,
        status: Option<u16>,
    },

    #[error("Malformed response from upstream: {message}")]
    #[diagnostic(
        code(storefront::bad_response),
        help("The upstream returned something unexpected; retry or check the base URL.")
    )]
    BadResponse { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid input: {reason}")]
    #[diagnostic(code(storefront::validation))]
    Validation { reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(storefront::config),
        help("Check the config file or STOREFRONT_* environment overrides.")
    )]
    Config { message: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(storefront::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    ConfirmationRequired { action: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::SessionExpired => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::ConfirmationRequired { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound {
                entity_type,
                identifier,
            } => CliError::NotFound {
                list_command: format!("{}s list", entity_type.to_lowercase()),
                resource_type: entity_type,
                identifier,
            },

            CoreError::Network { message } => CliError::ConnectionFailed { reason: message },

            CoreError::Api { message, status } => CliError::Api { message, status },

            CoreError::Parse { message } => CliError::BadResponse { message },

            CoreError::SessionExpired => CliError::SessionExpired,

            CoreError::Validation { message } => CliError::Validation { reason: message },

            CoreError::Config { message } => CliError::Config { message },
        }
    }
}

impl From<storefront_config::ConfigError> for CliError {
    fn from(err: storefront_config::ConfigError) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}

impl From<storefront_api::Error> for CliError {
    fn from(err: storefront_api::Error) -> Self {
        Self::from(CoreError::from(err))
    }
}
