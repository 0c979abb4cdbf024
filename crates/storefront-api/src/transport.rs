// Shared transport configuration for building reqwest::Client instances.
//
// Both the directory and catalog clients share timeout and user-agent
// settings through this module, along with the optional bearer session
// that every request attaches and any 401 response invalidates.

use std::sync::RwLock;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

const USER_AGENT: &str = "storefront/0.1.0";

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(crate::error::Error::Transport)
    }
}

/// Bearer-token session shared across clients.
///
/// The token is attached to every request that has a session installed.
/// Any 401 response clears it, regardless of which resource was being
/// fetched -- after that, requests go out unauthenticated until a new
/// token is stored.
#[derive(Debug, Default)]
pub struct Session {
    token: RwLock<Option<SecretString>>,
}

impl Session {
    pub fn new(token: SecretString) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }

    /// Expose the current token for header construction.
    pub fn bearer(&self) -> Option<String> {
        self.token
            .read()
            .ok()?
            .as_ref()
            .map(|t| format!("Bearer {}", t.expose_secret()))
    }

    /// Store a new token, replacing any existing one.
    pub fn store(&self, token: SecretString) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token);
        }
    }

    /// Drop the stored token. Called by the clients on a 401 response.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_ok_and(|t| t.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_clear_drops_token() {
        let session = Session::new(SecretString::from("tok-123".to_owned()));
        assert!(session.is_authenticated());
        assert_eq!(session.bearer().as_deref(), Some("Bearer tok-123"));

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.bearer().is_none());
    }

    #[test]
    fn session_store_replaces_token() {
        let session = Session::default();
        assert!(session.bearer().is_none());

        session.store(SecretString::from("next".to_owned()));
        assert_eq!(session.bearer().as_deref(), Some("Bearer next"));
    }
}
