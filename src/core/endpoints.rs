//! Request URL assembly for OMDB, Kinocheck and YouTube.
//!
//! URLs are built by concatenating fixed markers with caller fragments, so the
//! parameter order on the wire is always the order below. Fragments are
//! percent-encoded as URI components before they are appended.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::config::ScoutConfig;

pub const PARAM_OMDB_TYPE: &str = "&type=movie";
pub const PARAM_OMDB_SEARCH_ALL: &str = "&s=";
pub const PARAM_OMDB_MOVIE_TITLE: &str = "&i=";
pub const PARAM_OMDB_PLOT: &str = "&plot=full";

/// Unreserved characters (RFC 3986) stay literal; everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn encode_component(fragment: &str) -> String {
    utf8_percent_encode(fragment, COMPONENT).to_string()
}

#[derive(Debug, Clone)]
pub struct Endpoints {
    /// `<omdb>?apikey=<key>`
    omdb_base: String,
    /// `<kinocheck>?language=<lang>&imdb_id=`
    trailers_prefix: String,
    youtube_embed_base: String,
}

impl Endpoints {
    pub fn new(
        omdb_base_url: &str,
        api_key: &str,
        kinocheck_base_url: &str,
        language: &str,
        youtube_embed_base: &str,
    ) -> Self {
        Self {
            omdb_base: format!("{}?apikey={}", omdb_base_url, encode_component(api_key)),
            trailers_prefix: format!(
                "{}?language={}&imdb_id=",
                kinocheck_base_url,
                encode_component(language)
            ),
            youtube_embed_base: youtube_embed_base.to_string(),
        }
    }

    pub fn from_config(config: &ScoutConfig) -> Self {
        let omdb_base_url = config.omdb.resolve_base_url();
        let kinocheck_base_url = config.kinocheck.resolve_base_url();
        for url in [&omdb_base_url, &kinocheck_base_url] {
            if let Err(e) = url::Url::parse(url) {
                tracing::warn!("configured base URL '{}' does not parse: {}", url, e);
            }
        }

        let api_key = config.omdb.resolve_api_key().unwrap_or_else(|| {
            tracing::warn!(
                "no OMDB API key configured (set OMDB_API_KEY); requests will be rejected upstream"
            );
            String::new()
        });

        Self::new(
            &omdb_base_url,
            &api_key,
            &kinocheck_base_url,
            &config.kinocheck.resolve_language(),
            &config.resolve_youtube_embed_base(),
        )
    }

    /// base + type filter + search marker + query
    pub fn omdb_search(&self, query: &str) -> String {
        format!(
            "{}{}{}{}",
            self.omdb_base,
            PARAM_OMDB_TYPE,
            PARAM_OMDB_SEARCH_ALL,
            encode_component(query)
        )
    }

    /// base + id marker + id + full plot
    pub fn omdb_detail(&self, imdb_id: &str) -> String {
        format!(
            "{}{}{}{}",
            self.omdb_base,
            PARAM_OMDB_MOVIE_TITLE,
            encode_component(imdb_id),
            PARAM_OMDB_PLOT
        )
    }

    pub fn trailers(&self, imdb_id: &str) -> String {
        format!("{}{}", self.trailers_prefix, encode_component(imdb_id))
    }

    pub fn youtube_embed(&self, video_id: &str) -> String {
        format!("{}{}", self.youtube_embed_base, encode_component(video_id))
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        use super::config::{
            DEFAULT_KINOCHECK_BASE_URL, DEFAULT_KINOCHECK_LANGUAGE, DEFAULT_OMDB_BASE_URL,
            DEFAULT_YOUTUBE_EMBED_BASE,
        };
        Self::new(
            DEFAULT_OMDB_BASE_URL,
            "",
            DEFAULT_KINOCHECK_BASE_URL,
            DEFAULT_KINOCHECK_LANGUAGE,
            DEFAULT_YOUTUBE_EMBED_BASE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new(
            "https://www.omdbapi.com/",
            "k3y",
            "https://api.kinocheck.com/trailers",
            "en",
            "https://www.youtube.com/embed/",
        )
    }

    #[test]
    fn search_url_keeps_parameter_order() {
        assert_eq!(
            endpoints().omdb_search("alien"),
            "https://www.omdbapi.com/?apikey=k3y&type=movie&s=alien"
        );
    }

    #[test]
    fn search_query_is_percent_encoded() {
        let url = endpoints().omdb_search("fast & furious #7");
        assert_eq!(
            url,
            "https://www.omdbapi.com/?apikey=k3y&type=movie&s=fast%20%26%20furious%20%237"
        );
        assert!(url::Url::parse(&url).is_ok());
    }

    #[test]
    fn detail_url_requests_full_plot() {
        assert_eq!(
            endpoints().omdb_detail("tt0078748"),
            "https://www.omdbapi.com/?apikey=k3y&i=tt0078748&plot=full"
        );
    }

    #[test]
    fn trailer_and_embed_urls() {
        let e = endpoints();
        assert_eq!(
            e.trailers("tt0078748"),
            "https://api.kinocheck.com/trailers?language=en&imdb_id=tt0078748"
        );
        assert_eq!(
            e.youtube_embed("dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn unicode_query_survives_encoding() {
        let url = endpoints().omdb_search("amélie");
        assert!(url.ends_with("&s=am%C3%A9lie"));
    }
}
