use crate::core::endpoints::Endpoints;
use crate::types::{MovieDetail, SearchPayload};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::debug;

use super::{MovieCatalog, SearchError};

/// OMDB over HTTP. One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    endpoints: Arc<Endpoints>,
}

impl OmdbClient {
    pub fn new(http: reqwest::Client, endpoints: Arc<Endpoints>) -> Self {
        Self { http, endpoints }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<(StatusCode, T), SearchError> {
        let resp = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SearchError::Http(status));
        }

        let body = resp.json::<T>().await?;
        Ok((status, body))
    }
}

#[async_trait]
impl MovieCatalog for OmdbClient {
    async fn search(&self, query: &str) -> Result<SearchPayload, SearchError> {
        let (status, payload) = self
            .get_json::<SearchPayload>(self.endpoints.omdb_search(query))
            .await?;
        debug!(
            "omdb search '{}' -> {} ({} entries, total {:?})",
            query,
            status,
            payload.search.as_ref().map(|s| s.len()).unwrap_or(0),
            payload.total_results
        );
        Ok(payload)
    }

    async fn detail(&self, imdb_id: &str) -> Result<MovieDetail, SearchError> {
        let (status, detail) = self
            .get_json::<MovieDetail>(self.endpoints.omdb_detail(imdb_id))
            .await?;
        debug!("omdb detail '{}' -> {}", imdb_id, status);

        if let Some(message) = detail.error.as_deref().filter(|e| !e.is_empty()) {
            return Err(SearchError::Api(message.to_string()));
        }
        Ok(detail)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
