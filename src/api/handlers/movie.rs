use super::common::{upstream_error, HandlerError};
use crate::tools::detail::movie_detail;
use crate::tools::trailers::movie_trailers;
use crate::types::{MovieDetail, TrailersResponse};
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Json;
use std::sync::Arc;
use tracing::warn;

pub async fn detail(
    State(state): State<Arc<AppState>>,
    Path(imdb_id): Path<String>,
) -> Result<Json<MovieDetail>, HandlerError> {
    movie_detail(&state, &imdb_id)
        .await
        .map(Json)
        .map_err(|e| {
            warn!("Detail error for '{}': {}", imdb_id, e);
            upstream_error("Detail lookup failed", &e)
        })
}

pub async fn trailers(
    State(state): State<Arc<AppState>>,
    Path(imdb_id): Path<String>,
) -> Result<Json<TrailersResponse>, HandlerError> {
    match movie_trailers(&state, &imdb_id).await {
        Ok(trailers) => Ok(Json(TrailersResponse { imdb_id, trailers })),
        Err(e) => {
            warn!("Trailer error for '{}': {}", imdb_id, e);
            Err(upstream_error("Trailer lookup failed", &e))
        }
    }
}
