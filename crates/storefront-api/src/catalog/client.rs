// Hand-crafted async HTTP client for the product-catalog upstream.
//
// Resource root: {base}/products

use std::sync::Arc;

use tracing::debug;
use url::Url;

use super::types::{ProductWriteBody, RawProduct};
use crate::Error;
use crate::http::{handle_empty, handle_response, normalize_base_url};
use crate::transport::{Session, TransportConfig};

/// Default public instance of the catalog upstream.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Async client for the product-catalog REST resource.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
    session: Option<Arc<Session>>,
}

impl CatalogClient {
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

    /// Fetch the full product collection; callers filter client-side.
    pub async fn list_products(&self) -> Result<Vec<RawProduct>, Error> {
        let url = self.url("products")?;
        debug!("GET {url}");

        let resp = self.apply_session(self.http.get(url)).send().await?;
        handle_response(resp, self.session.as_deref()).await
    }

    /// Fetch a single product by identifier.
    pub async fn get_product(&self, id: &str) -> Result<RawProduct, Error> {
        let url = self.url(&format!("products/{id}"))?;
        debug!("GET {url}");

        let resp = self.apply_session(self.http.get(url)).send().await?;
        handle_response(resp, self.session.as_deref()).await
    }

    /// Create a product. The upstream echoes the body back with an
    /// assigned id but does not persist it.
    pub async fn create_product(&self, body: &ProductWriteBody) -> Result<RawProduct, Error> {
        let url = self.url("products")?;
        debug!("POST {url}");

        let resp = self
            .apply_session(self.http.post(url).json(body))
            .send()
            .await?;
        handle_response(resp, self.session.as_deref()).await
    }

    /// Update a product. Same echo, same non-persistence caveat.
    pub async fn update_product(
        &self,
        id: &str,
        body: &ProductWriteBody,
    ) -> Result<RawProduct, Error> {
        let url = self.url(&format!("products/{id}"))?;
        debug!("PUT {url}");

        let resp = self
            .apply_session(self.http.put(url).json(body))
            .send()
            .await?;
        handle_response(resp, self.session.as_deref()).await
    }

    /// Delete a product. The upstream accepts the call without persisting it.
    pub async fn delete_product(&self, id: &str) -> Result<(), Error> {
        let url = self.url(&format!("products/{id}"))?;
        debug!("DELETE {url}");

        let resp = self.apply_session(self.http.delete(url)).send().await?;
        handle_empty(resp, self.session.as_deref()).await
    }
}
