//! Shared configuration for the storefront CLI.
//!
//! TOML config file merged with `STOREFRONT_`-prefixed environment
//! variables, plus optional API token resolution. The CLI layers its
//! flag overrides on top of what this crate loads.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_api::TransportConfig;

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
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Output and paging defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Upstream endpoints and transport settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Saved list filters, applied when a command passes none.
    #[serde(default)]
    pub saved_filters: SavedFilters,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Default page size for list commands.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            limit: default_limit(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_limit() -> usize {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// User directory base URL.
    #[serde(default = "default_directory_url")]
    pub directory_url: String,

    /// Product catalog base URL.
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Bearer token (plaintext -- prefer the env var).
    pub api_token: Option<String>,

    /// Environment variable name containing the bearer token.
    pub api_token_env: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            directory_url: default_directory_url(),
            catalog_url: default_catalog_url(),
            timeout: default_timeout(),
            api_token: None,
            api_token_env: None,
        }
    }
}

fn default_directory_url() -> String {
    storefront_api::directory::DEFAULT_BASE_URL.into()
}
fn default_catalog_url() -> String {
    storefront_api::catalog::DEFAULT_BASE_URL.into()
}
fn default_timeout() -> u64 {
    30
}

/// Saved filters per collection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SavedFilters {
    #[serde(default)]
    pub users: FilterSpec,

    #[serde(default)]
    pub products: FilterSpec,
}

/// One saved filter fragment.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FilterSpec {
    pub search: Option<String>,
    pub facet: Option<String>,
}

impl FilterSpec {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.facet.is_none()
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("rs", "storefront", "storefront").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("storefront");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from an explicit path (tests, `--config` overrides).
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("STOREFRONT_").split("_"));

    let config: Config = figment.extract()?;
    if config.defaults.limit == 0 {
        return Err(ConfigError::Validation {
            field: "defaults.limit".into(),
            reason: "page size must be at least 1".into(),
        });
    }
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
#[must_use]
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Saved filters ───────────────────────────────────────────────────

/// Load the saved filter fragment for one collection namespace.
pub fn load_filters(namespace: &str) -> Result<FilterSpec, ConfigError> {
    let cfg = load_config_or_default();
    match namespace {
        "users" => Ok(cfg.saved_filters.users),
        "products" => Ok(cfg.saved_filters.products),
        other => Err(ConfigError::Validation {
            field: "namespace".into(),
            reason: format!("expected 'users' or 'products', got '{other}'"),
        }),
    }
}

/// Persist the filter fragment for one collection namespace. The rest
/// of the config file is preserved.
pub fn save_filters(namespace: &str, spec: &FilterSpec) -> Result<(), ConfigError> {
    let mut cfg = load_config_or_default();
    match namespace {
        "users" => cfg.saved_filters.users = spec.clone(),
        "products" => cfg.saved_filters.products = spec.clone(),
        other => {
            return Err(ConfigError::Validation {
                field: "namespace".into(),
                reason: format!("expected 'users' or 'products', got '{other}'"),
            });
        }
    }
    save_config(&cfg)
}

// ── Token resolution ────────────────────────────────────────────────

/// Resolve the optional bearer token: named env var first, then the
/// plaintext config field. Both public upstreams work unauthenticated,
/// so a missing token is not an error.
#[must_use]
pub fn resolve_api_token(api: &ApiConfig) -> Option<SecretString> {
    if let Some(env_name) = &api.api_token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Some(SecretString::from(val));
        }
    }
    api.api_token.clone().map(SecretString::from)
}

/// Translate the API section into a transport config.
#[must_use]
pub fn transport_config(api: &ApiConfig) -> TransportConfig {
    TransportConfig {
        timeout: Duration::from_secs(api.timeout),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_point_at_public_upstreams() {
        let config = Config::default();
        assert_eq!(config.api.directory_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.api.catalog_url, "https://fakestoreapi.com");
        assert_eq!(config.defaults.limit, 10);
        assert_eq!(config.defaults.output, "table");
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[defaults]
limit = 25

[api]
catalog_url = "http://localhost:9000"

[saved_filters.products]
facet = "electronics"
"#
        )
        .unwrap();

        let config = load_config_from(file.path()).unwrap();

        assert_eq!(config.defaults.limit, 25);
        assert_eq!(config.api.catalog_url, "http://localhost:9000");
        assert_eq!(
            config.saved_filters.products.facet.as_deref(),
            Some("electronics")
        );
        assert!(config.saved_filters.users.is_empty());
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nlimit = 0").unwrap();

        let result = load_config_from(file.path());

        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn token_prefers_named_env_var() {
        let api = ApiConfig {
            api_token: Some("from-file".into()),
            api_token_env: Some("STOREFRONT_TEST_TOKEN_UNSET".into()),
            ..ApiConfig::default()
        };
        // Env var not set: falls back to plaintext.
        let token = resolve_api_token(&api);
        assert!(token.is_some());
    }
}
