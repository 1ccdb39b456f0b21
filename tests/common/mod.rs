//! Local stand-in for the OMDB and Kinocheck APIs.
#![allow(dead_code)]

use axum::extract::{Query, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use cinescout::core::config::{KinocheckConfig, OmdbConfig, ScoutConfig};
use cinescout::AppState;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const API_KEY: &str = "test-key";

type Seen = Arc<Mutex<Vec<String>>>;

pub struct StandIn {
    pub base: String,
    seen: Seen,
}

impl StandIn {
    /// Raw query strings received so far, in arrival order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }

    pub fn config(&self) -> ScoutConfig {
        ScoutConfig {
            omdb: OmdbConfig {
                api_key: Some(API_KEY.to_string()),
                base_url: Some(format!("{}/omdb/", self.base)),
            },
            kinocheck: KinocheckConfig {
                base_url: Some(format!("{}/kinocheck/trailers", self.base)),
                language: Some("en".to_string()),
            },
            youtube_embed_base: Some("https://www.youtube.com/embed/".to_string()),
            ..Default::default()
        }
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::new(AppState::new(reqwest::Client::new(), self.config()))
    }
}

pub fn init_logger() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub async fn spawn_stand_in() -> StandIn {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/omdb/", get(omdb))
        .route("/kinocheck/trailers", get(kinocheck))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StandIn {
        base: format!("http://{}", addr),
        seen,
    }
}

/// Address nothing listens on, for connection failures.
pub async fn dead_address() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn omdb(
    State(seen): State<Seen>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    seen.lock().unwrap().push(raw.unwrap_or_default());

    if params.get("apikey").map(String::as_str) != Some(API_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"Response": "False", "Error": "Invalid API key!"})),
        )
            .into_response();
    }

    if let Some(query) = params.get("s") {
        return match query.as_str() {
            "alien" => Json(json!({
                "Search": [
                    {"Title": "Alien", "Year": "1979", "imdbID": "tt0078748", "Type": "movie", "Poster": "https://img.test/alien.jpg"},
                    {"Title": "Alien Lost", "Year": "2011", "imdbID": "tt9999991", "Type": "movie", "Poster": "N/A"},
                    {"Title": "Aliens", "Year": "1986", "imdbID": "tt0090605", "Type": "movie", "Poster": "https://img.test/aliens.jpg"}
                ],
                "totalResults": "3",
                "Response": "True"
            }))
            .into_response(),
            "boom" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
            "broken" => (StatusCode::OK, "<html>not json</html>").into_response(),
            _ => Json(json!({"Response": "False", "Error": "Movie not found!"})).into_response(),
        };
    }

    if let Some(id) = params.get("i") {
        if id == "tt0078748" && params.get("plot").map(String::as_str) == Some("full") {
            return Json(json!({
                "Title": "Alien",
                "Year": "1979",
                "Rated": "R",
                "Runtime": "117 min",
                "Genre": "Horror, Sci-Fi",
                "Director": "Ridley Scott",
                "Plot": "The crew of a commercial spacecraft encounters a deadly lifeform.",
                "Poster": "N/A",
                "Ratings": [{"Source": "Internet Movie Database", "Value": "8.5/10"}],
                "imdbRating": "8.5",
                "imdbID": "tt0078748",
                "Type": "movie",
                "Response": "True"
            }))
            .into_response();
        }
        return Json(json!({"Response": "False", "Error": "Incorrect IMDb ID."})).into_response();
    }

    Json(json!({"Response": "False", "Error": "Something went wrong."})).into_response()
}

async fn kinocheck(
    State(seen): State<Seen>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    seen.lock().unwrap().push(raw.unwrap_or_default());

    match params.get("imdb_id").map(String::as_str) {
        Some("tt0078748") => Json(json!([
            {"id": "k1", "title": "Alien - Official Trailer", "youtube_video_id": "LjLamj-b0I8", "language": "en", "categories": ["Trailer"]},
            {"id": "k2", "title": "Alien - Behind the scenes"},
            {"id": "k3", "title": "Alien - Clip", "youtube_video_id": "jQ5lPt9edzQ", "language": "en"}
        ]))
        .into_response(),
        Some("tt0000001") => Json(json!({"error": "quota exceeded"})).into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response(),
    }
}
