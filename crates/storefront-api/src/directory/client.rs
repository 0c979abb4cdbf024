// Hand-crafted async HTTP client for the user-directory upstream.
//
// Resource root: {base}/users
// The public instance needs no auth; a session token is attached when
// one has been installed via `with_session`.

use std::sync::Arc;

use tracing::debug;
use url::Url;

use super::types::{RawUser, UserWriteBody};
use crate::Error;
use crate::http::{handle_empty, handle_response, normalize_base_url};
use crate::transport::{Session, TransportConfig};

/// Default public instance of the directory upstream.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Identifier of the record served as the "current user" profile.
const PROFILE_ID: &str = "1";

/// Async client for the user-directory REST resource.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: Url,
    session: Option<Arc<Session>>,
}

impl DirectoryClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            base_url: normalize_base_url(base_url)?,
            session: None,
        })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
            session: None,
        })
    }

    /// Attach a shared bearer session.
    pub fn with_session(mut self, session: Arc<Session>) -> Self {
        self.session = Some(session);
        self
    }

    // ── URL builder ──────────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    fn apply_session(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.as_ref().and_then(|s| s.bearer()) {
            Some(bearer) => req.header(reqwest::header::AUTHORIZATION, bearer),
            None => req,
        }
    }

    // ── Public API ───────────────────────────────────────────────────

    /// Fetch the full user collection. The upstream has no server-side
    /// filtering or pagination; callers filter client-side.
    pub async fn list_users(&self) -> Result<Vec<RawUser>, Error> {
        let url = self.url("users")?;
        debug!("GET {url}");

        let resp = self.apply_session(self.http.get(url)).send().await?;
        handle_response(resp, self.session.as_deref()).await
    }

    /// Fetch a single user by identifier.
    pub async fn get_user(&self, id: &str) -> Result<RawUser, Error> {
        let url = self.url(&format!("users/{id}"))?;
        debug!("GET {url}");

        let resp = self.apply_session(self.http.get(url)).send().await?;
        handle_response(resp, self.session.as_deref()).await
    }

    /// Fetch the record backing the "current user" profile view.
    pub async fn get_profile(&self) -> Result<RawUser, Error> {
        self.get_user(PROFILE_ID).await
    }

    /// Create a user. The upstream echoes the body back with an
    /// assigned id but does not persist it.
    pub async fn create_user(&self, body: &UserWriteBody) -> Result<RawUser, Error> {
        let url = self.url("users")?;
        debug!("POST {url}");

        let resp = self
            .apply_session(self.http.post(url).json(body))
            .send()
            .await?;
        handle_response(resp, self.session.as_deref()).await
    }

    /// Update a user. Same echo, same non-persistence caveat.
    pub async fn update_user(&self, id: &str, body: &UserWriteBody) -> Result<RawUser, Error> {
        let url = self.url(&format!("users/{id}"))?;
        debug!("PUT {url}");

        let resp = self
            .apply_session(self.http.put(url).json(body))
            .send()
            .await?;
        handle_response(resp, self.session.as_deref()).await
    }

    /// Delete a user. The upstream accepts the call without persisting it.
    pub async fn delete_user(&self, id: &str) -> Result<(), Error> {
        let url = self.url(&format!("users/{id}"))?;
        debug!("DELETE {url}");

        let resp = self.apply_session(self.http.delete(url)).send().await?;
        handle_empty(resp, self.session.as_deref()).await
    }
}
