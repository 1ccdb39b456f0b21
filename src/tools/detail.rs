use crate::search::SearchError;
use crate::types::{MovieDetail, POSTER_UNAVAILABLE};
use crate::AppState;
use tracing::info;

/// Full record for one IMDb id, with the "N/A" poster marker blanked out.
pub async fn movie_detail(state: &AppState, imdb_id: &str) -> Result<MovieDetail, SearchError> {
    let imdb_id = imdb_id.trim();
    info!("Looking up {} detail for: {}", state.store.catalog().name(), imdb_id);

    let mut detail = state.store.catalog().detail(imdb_id).await?;
    if detail.poster == POSTER_UNAVAILABLE {
        detail.poster.clear();
    }
    Ok(detail)
}
