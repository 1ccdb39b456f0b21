use crate::core::endpoints::Endpoints;
use crate::search::SearchError;
use crate::types::Trailer;
use crate::AppState;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Kinocheck answers with a bare list, a movie object carrying `trailer` and
/// `videos`, or a single trailer object. Any other object (an `{"error": ..}`
/// body, for one) is a decode failure.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TrailerPayload {
    List(Vec<Trailer>),
    Movie {
        trailer: Option<Trailer>,
        videos: Vec<Trailer>,
    },
    Single(SingleTrailer),
}

/// A lone trailer object must at least name its YouTube video.
#[derive(Debug, Deserialize)]
struct SingleTrailer {
    youtube_video_id: String,
    #[serde(flatten)]
    rest: Trailer,
}

impl TrailerPayload {
    fn into_trailers(self) -> Vec<Trailer> {
        match self {
            TrailerPayload::List(list) => list,
            TrailerPayload::Movie { trailer, videos } => trailer.into_iter().chain(videos).collect(),
            TrailerPayload::Single(SingleTrailer {
                youtube_video_id,
                mut rest,
            }) => {
                rest.youtube_video_id = Some(youtube_video_id);
                vec![rest]
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrailerClient {
    http: reqwest::Client,
    endpoints: Arc<Endpoints>,
}

impl TrailerClient {
    pub fn new(http: reqwest::Client, endpoints: Arc<Endpoints>) -> Self {
        Self { http, endpoints }
    }

    /// Trailers for an IMDb id. Entries without a YouTube video are dropped,
    /// duplicates collapsed, and each kept entry gets its embed URL.
    pub async fn trailers(&self, imdb_id: &str) -> Result<Vec<Trailer>, SearchError> {
        let resp = self
            .http
            .get(self.endpoints.trailers(imdb_id))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SearchError::Http(status));
        }

        let payload = resp.json::<TrailerPayload>().await?;
        let trailers = self.finish(payload.into_trailers());
        debug!("kinocheck '{}' -> {} trailers", imdb_id, trailers.len());
        Ok(trailers)
    }

    fn finish(&self, raw: Vec<Trailer>) -> Vec<Trailer> {
        let mut seen = HashSet::new();
        raw.into_iter()
            .filter_map(|mut t| {
                let video_id = t
                    .youtube_video_id
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())?
                    .to_string();
                if !seen.insert(video_id.clone()) {
                    return None;
                }
                t.embed_url = Some(self.endpoints.youtube_embed(&video_id));
                t.youtube_video_id = Some(video_id);
                Some(t)
            })
            .collect()
    }
}

pub async fn movie_trailers(state: &AppState, imdb_id: &str) -> Result<Vec<Trailer>, SearchError> {
    let imdb_id = imdb_id.trim();
    info!("Fetching trailers for: {}", imdb_id);
    state.trailers.trailers(imdb_id).await
}
