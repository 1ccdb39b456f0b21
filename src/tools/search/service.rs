use crate::types::{MovieDetail, SearchPayload};
use async_trait::async_trait;

use super::SearchError;

/// Remote movie catalog the store reads from.
///
/// `search` returns the raw payload so the store can apply its own handling
/// of API-level errors and poster filtering.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchPayload, SearchError>;

    async fn detail(&self, imdb_id: &str) -> Result<MovieDetail, SearchError>;

    /// Catalog name for logging.
    fn name(&self) -> &'static str;
}
