use super::common::{bad_request, upstream_error, HandlerError};
use crate::types::{ResultsResponse, SearchParams, SearchResponse};
use crate::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use std::sync::Arc;
use tracing::warn;

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, HandlerError> {
    // Blank queries are rejected, but the query is forwarded exactly as sent.
    let query = params
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| bad_request("Missing required parameter: q"))?;

    let _loading = state.loader.track();
    match state.store.try_search_all(&query).await {
        Ok(results) => Ok(Json(SearchResponse { query, results })),
        Err(e) => {
            warn!("Search error for '{}': {}", query, e);
            Err(upstream_error("Search failed", &e))
        }
    }
}

pub async fn results(State(state): State<Arc<AppState>>) -> Json<ResultsResponse> {
    Json(ResultsResponse {
        results: state.store.results(),
    })
}

pub async fn clear(State(state): State<Arc<AppState>>) -> StatusCode {
    state.store.clear_results();
    StatusCode::NO_CONTENT
}
