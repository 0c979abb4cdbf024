//! Application context: wires config + CLI flags into clients, actions,
//! and the shared resource store.

use std::sync::Arc;

use secrecy::SecretString;

use storefront_api::{CatalogClient, DirectoryClient, Session};
use storefront_config::Config;
use storefront_core::{
    ProductActions, ProductCatalog, ResourceStore, UserActions, UserDirectory,
};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::notify::TermNotifier;
use crate::output;

/// Everything a command handler needs.
pub struct AppContext {
    pub store: ResourceStore,
    pub users: UserActions,
    pub products: ProductActions,
    pub directory: UserDirectory,
    pub config: Config,
}

impl AppContext {
    /// Build the context from the loaded config with CLI flag overrides.
    pub fn build(global: &GlobalOpts) -> Result<Self, CliError> {
        let config = match &global.config {
            Some(path) => storefront_config::load_config_from(path)?,
            None => storefront_config::load_config()?,
        };

        let mut api = config.api.clone();
        if let Some(url) = &global.directory_url {
            api.directory_url.clone_from(url);
        }
        if let Some(url) = &global.catalog_url {
            api.catalog_url.clone_from(url);
        }
        if let Some(timeout) = global.timeout {
            api.timeout = timeout;
        }

        let transport = storefront_config::transport_config(&api);
        let session = Arc::new(Session::default());
        let token = global
            .api_token
            .clone()
            .map(SecretString::from)
            .or_else(|| storefront_config::resolve_api_token(&api));
        if let Some(token) = token {
            session.store(token);
        }

        let directory_client = DirectoryClient::new(&api.directory_url, &transport)?
            .with_session(session.clone());
        let catalog_client =
            CatalogClient::new(&api.catalog_url, &transport)?.with_session(session);

        let store = ResourceStore::new();
        let notifier = Arc::new(TermNotifier::new(
            output::should_color(&global.color),
            global.quiet,
        ));

        let directory = UserDirectory::new(directory_client);
        let users = UserActions::new(directory.clone(), store.users.clone(), notifier.clone());
        let products = ProductActions::new(
            ProductCatalog::new(catalog_client),
            store.products.clone(),
            notifier,
        );

        let mut config = config;
        config.api = api;

        Ok(Self {
            store,
            users,
            products,
            directory,
            config,
        })
    }
}
