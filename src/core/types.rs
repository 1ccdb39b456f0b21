use serde::{Deserialize, Serialize};

/// OMDB's marker for "no poster image available".
pub const POSTER_UNAVAILABLE: &str = "N/A";

/// OMDB `Type` discriminator. Values OMDB may add later are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MovieKind {
    Movie,
    Series,
    Episode,
    Game,
    Other(String),
}

impl Default for MovieKind {
    fn default() -> Self {
        MovieKind::Other(String::new())
    }
}

impl From<String> for MovieKind {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "movie" => MovieKind::Movie,
            "series" => MovieKind::Series,
            "episode" => MovieKind::Episode,
            "game" => MovieKind::Game,
            _ => MovieKind::Other(raw),
        }
    }
}

impl From<MovieKind> for String {
    fn from(kind: MovieKind) -> Self {
        match kind {
            MovieKind::Movie => "movie".to_string(),
            MovieKind::Series => "series".to_string(),
            MovieKind::Episode => "episode".to_string(),
            MovieKind::Game => "game".to_string(),
            MovieKind::Other(raw) => raw,
        }
    }
}

/// One entry of an OMDB search listing.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Movie {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    /// Image URL, or [`POSTER_UNAVAILABLE`].
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Type", default)]
    pub kind: MovieKind,
}

impl Movie {
    pub fn has_poster(&self) -> bool {
        self.poster != POSTER_UNAVAILABLE
    }
}

/// Body of an OMDB search response: either `Search` or `Error` is set.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SearchPayload {
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<Movie>>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl SearchPayload {
    /// API-level error message, if the payload carries a non-empty one.
    pub fn api_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Rating {
    #[serde(rename = "Source", default)]
    pub source: String,
    #[serde(rename = "Value", default)]
    pub value: String,
}

/// Full OMDB record for a single title (`&i=<id>&plot=full`).
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct MovieDetail {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Rated")]
    pub rated: Option<String>,
    #[serde(rename = "Released")]
    pub released: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Writer")]
    pub writer: Option<String>,
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Awards")]
    pub awards: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: String,
    #[serde(rename = "Ratings")]
    pub ratings: Vec<Rating>,
    #[serde(rename = "Metascore")]
    pub metascore: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub kind: MovieKind,
    #[serde(rename = "BoxOffice")]
    pub box_office: Option<String>,
    #[serde(rename = "Production")]
    pub production: Option<String>,
    #[serde(rename = "Website")]
    pub website: Option<String>,
    #[serde(rename = "Error", skip_serializing)]
    pub error: Option<String>,
}

/// A Kinocheck trailer record.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Trailer {
    pub id: Option<String>,
    pub youtube_video_id: Option<String>,
    pub youtube_channel_id: Option<String>,
    pub title: String,
    pub thumbnail: Option<String>,
    pub language: Option<String>,
    pub categories: Vec<String>,
    pub published: Option<String>,
    /// Filled in locally from `youtube_video_id`.
    pub embed_url: Option<String>,
}

// ---------------------------------------------------------------------------
// HTTP surface DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<Movie>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub results: Option<Vec<Movie>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoadingResponse {
    pub loading: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrailersResponse {
    pub imdb_id: String,
    pub trailers: Vec<Trailer>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
