mod error;
pub mod omdb;
mod service;

use crate::types::Movie;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, error, info};

pub use error::{ErrorKind, SearchError};
pub use omdb::OmdbClient;
pub use service::MovieCatalog;

/// What happens when overlapping searches complete out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultOrdering {
    /// Whichever response resolves last is stored, regardless of issue order.
    #[default]
    LastResponseWins,
    /// Only the most recently issued search may store its results; older
    /// completions still return to their caller but leave the store alone.
    LatestRequestWins,
}

impl ResultOrdering {
    pub fn parse_str(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "last_response_wins" | "last_response" => Some(Self::LastResponseWins),
            "latest_request_wins" | "latest_request" => Some(Self::LatestRequestWins),
            _ => None,
        }
    }
}

/// Drops entries whose poster is the "N/A" marker, keeping server order.
pub fn keep_with_posters(movies: Vec<Movie>) -> Vec<Movie> {
    movies.into_iter().filter(Movie::has_poster).collect()
}

/// Holds the latest search results and runs searches against a catalog.
///
/// `results` is absent until a search succeeds, and is reset to absent at the
/// start of every search. A failed search leaves it absent.
pub struct MovieStore {
    catalog: Arc<dyn MovieCatalog>,
    results: RwLock<Option<Vec<Movie>>>,
    ordering: ResultOrdering,
    generation: AtomicU64,
}

impl std::fmt::Debug for MovieStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieStore")
            .field("catalog", &self.catalog.name())
            .field("ordering", &self.ordering)
            .field("has_results", &self.results().is_some())
            .finish()
    }
}

impl MovieStore {
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self::with_ordering(catalog, ResultOrdering::default())
    }

    pub fn with_ordering(catalog: Arc<dyn MovieCatalog>, ordering: ResultOrdering) -> Self {
        Self {
            catalog,
            results: RwLock::new(None),
            ordering,
            generation: AtomicU64::new(0),
        }
    }

    pub fn catalog(&self) -> &Arc<dyn MovieCatalog> {
        &self.catalog
    }

    pub fn ordering(&self) -> ResultOrdering {
        self.ordering
    }

    /// Snapshot of the current results.
    pub fn results(&self) -> Option<Vec<Movie>> {
        self.results
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn clear_results(&self) {
        *self
            .results
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }

    /// Runs a search and swallows every failure: the error is logged and
    /// `None` is returned, with the stored results left absent.
    pub async fn search_all(&self, query: &str) -> Option<Vec<Movie>> {
        match self.try_search_all(query).await {
            Ok(movies) => Some(movies),
            Err(SearchError::Http(status)) => {
                error!("search request for '{}' failed with status {}", query, status);
                None
            }
            Err(SearchError::Api(message)) => {
                error!("{}", message);
                None
            }
            Err(e) => {
                error!("search for '{}' failed: {}", query, e);
                None
            }
        }
    }

    /// Same flow as [`search_all`](Self::search_all) but hands the failure
    /// back to the caller.
    pub async fn try_search_all(&self, query: &str) -> Result<Vec<Movie>, SearchError> {
        // Ticket before clearing, so a newer search can never be cleared by
        // an older one that publishes late under LatestRequestWins.
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.clear_results();

        info!("Searching {} for: {}", self.catalog.name(), query);
        let payload = self.catalog.search(query).await?;

        if let Some(message) = payload.api_error() {
            return Err(SearchError::Api(message.to_string()));
        }
        let Some(listing) = payload.search else {
            return Err(SearchError::Decode(
                "response has neither Search nor Error".to_string(),
            ));
        };

        let total = listing.len();
        let movies = keep_with_posters(listing);
        debug!(
            "kept {} of {} results for '{}' after poster filter",
            movies.len(),
            total,
            query
        );

        self.publish(ticket, movies.clone());
        Ok(movies)
    }

    fn publish(&self, ticket: u64, movies: Vec<Movie>) {
        let mut slot = self
            .results
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if self.ordering == ResultOrdering::LatestRequestWins
            && self.generation.load(Ordering::SeqCst) != ticket
        {
            debug!("discarding results of superseded search #{}", ticket);
            return;
        }
        *slot = Some(movies);
    }
}
