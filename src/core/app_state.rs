use std::sync::Arc;

use super::config::ScoutConfig;
use super::endpoints::Endpoints;
use crate::features::loader::LoadingFlag;
use crate::search::{MovieCatalog, MovieStore, OmdbClient};
use crate::tools::trailers::TrailerClient;

/// Everything a UI collaborator needs, built once and shared.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MovieStore>,
    pub trailers: Arc<TrailerClient>,
    pub loader: Arc<LoadingFlag>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store)
            .field("loading", &self.loader.is_loading())
            .finish()
    }
}

impl AppState {
    /// Builds the OMDB catalog and the trailer client from `config`. Both share
    /// `http_client`.
    pub fn new(http_client: reqwest::Client, config: ScoutConfig) -> Self {
        let endpoints = Arc::new(Endpoints::from_config(&config));
        let catalog: Arc<dyn MovieCatalog> =
            Arc::new(OmdbClient::new(http_client.clone(), endpoints.clone()));
        let store = Arc::new(MovieStore::with_ordering(
            catalog,
            config.search.resolve_ordering(),
        ));
        let trailers = Arc::new(TrailerClient::new(http_client, endpoints));

        Self {
            store,
            trailers,
            loader: Arc::new(LoadingFlag::new()),
        }
    }

    /// Swaps the movie catalog, starting from an empty store with the same
    /// ordering policy.
    pub fn with_catalog(mut self, catalog: Arc<dyn MovieCatalog>) -> Self {
        self.store = Arc::new(MovieStore::with_ordering(catalog, self.store.ordering()));
        self
    }
}
