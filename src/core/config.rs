// ---------------------------------------------------------------------------
// ScoutConfig: file-based config loader (cinescout.json) with env-var fallback
// ---------------------------------------------------------------------------

use crate::tools::search::ResultOrdering;

pub const ENV_CONFIG_PATH: &str = "CINESCOUT_CONFIG";
pub const ENV_OMDB_API_KEY: &str = "OMDB_API_KEY";
/// Key name used by the browser build; accepted as a fallback.
pub const ENV_OMDB_API_KEY_LEGACY: &str = "VITE_OMDB_API_KEY";
pub const ENV_OMDB_BASE_URL: &str = "OMDB_BASE_URL";
pub const ENV_KINOCHECK_BASE_URL: &str = "KINOCHECK_BASE_URL";
pub const ENV_KINOCHECK_LANGUAGE: &str = "KINOCHECK_LANGUAGE";
pub const ENV_YOUTUBE_EMBED_BASE: &str = "YOUTUBE_EMBED_BASE";
pub const ENV_SEARCH_ORDERING: &str = "SEARCH_ORDERING";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
pub const ENV_HTTP_CONNECT_TIMEOUT_SECS: &str = "HTTP_CONNECT_TIMEOUT_SECS";

pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_KINOCHECK_BASE_URL: &str = "https://api.kinocheck.com/trailers";
pub const DEFAULT_KINOCHECK_LANGUAGE: &str = "en";
pub const DEFAULT_YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn pick(field: &Option<String>, env_key: &str, default: &str) -> String {
    if let Some(v) = field {
        if !v.trim().is_empty() {
            return v.trim().to_string();
        }
    }
    env_non_empty(env_key).unwrap_or_else(|| default.to_string())
}

/// OMDB sub-config (mirrors the `omdb` key in cinescout.json).
#[derive(serde::Deserialize, Default, Clone, Debug)]
pub struct OmdbConfig {
    /// API key. Never logged.
    pub api_key: Option<String>,
    /// Endpoint root, e.g. `https://www.omdbapi.com/`.
    pub base_url: Option<String>,
}

impl OmdbConfig {
    /// API key: JSON field → `OMDB_API_KEY` → `VITE_OMDB_API_KEY` → `None`.
    ///
    /// The key is not validated here. A missing or wrong key only shows up as a
    /// failed response from OMDB.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(k) = &self.api_key {
            if !k.trim().is_empty() {
                return Some(k.trim().to_string());
            }
        }
        env_non_empty(ENV_OMDB_API_KEY).or_else(|| env_non_empty(ENV_OMDB_API_KEY_LEGACY))
    }

    /// Base URL: JSON field → `OMDB_BASE_URL` → `https://www.omdbapi.com/`.
    pub fn resolve_base_url(&self) -> String {
        pick(&self.base_url, ENV_OMDB_BASE_URL, DEFAULT_OMDB_BASE_URL)
    }
}

/// Kinocheck sub-config (mirrors the `kinocheck` key in cinescout.json).
#[derive(serde::Deserialize, Default, Clone, Debug)]
pub struct KinocheckConfig {
    pub base_url: Option<String>,
    /// Trailer language code. Default: `en`.
    pub language: Option<String>,
}

impl KinocheckConfig {
    pub fn resolve_base_url(&self) -> String {
        pick(&self.base_url, ENV_KINOCHECK_BASE_URL, DEFAULT_KINOCHECK_BASE_URL)
    }

    pub fn resolve_language(&self) -> String {
        pick(&self.language, ENV_KINOCHECK_LANGUAGE, DEFAULT_KINOCHECK_LANGUAGE)
    }
}

#[derive(serde::Deserialize, Default, Clone, Debug)]
pub struct SearchConfig {
    /// `last_response_wins` (default) or `latest_request_wins`.
    pub ordering: Option<String>,
}

impl SearchConfig {
    /// Ordering: JSON field → `SEARCH_ORDERING` → `last_response_wins`.
    /// Unknown values log a warning and fall back to the default.
    pub fn resolve_ordering(&self) -> ResultOrdering {
        let raw = pick(&self.ordering, ENV_SEARCH_ORDERING, "last_response_wins");
        match ResultOrdering::parse_str(&raw) {
            Some(o) => o,
            None => {
                tracing::warn!("unknown search ordering '{}', using last_response_wins", raw);
                ResultOrdering::default()
            }
        }
    }
}

#[derive(serde::Deserialize, Default, Clone, Debug)]
pub struct HttpConfig {
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
}

impl HttpConfig {
    /// Request timeout: JSON field → `HTTP_TIMEOUT_SECS` → 30.
    pub fn resolve_timeout_secs(&self) -> u64 {
        if let Some(n) = self.timeout_secs {
            return n;
        }
        std::env::var(ENV_HTTP_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30)
    }

    /// Connect timeout: JSON field → `HTTP_CONNECT_TIMEOUT_SECS` → 10.
    pub fn resolve_connect_timeout_secs(&self) -> u64 {
        if let Some(n) = self.connect_timeout_secs {
            return n;
        }
        std::env::var(ENV_HTTP_CONNECT_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10)
    }
}

#[derive(serde::Deserialize, Default, Clone, Debug)]
pub struct ServerConfig {
    pub port: Option<u16>,
}

/// Top-level config loaded from `cinescout.json`.
#[derive(serde::Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct ScoutConfig {
    pub omdb: OmdbConfig,
    pub kinocheck: KinocheckConfig,
    pub youtube_embed_base: Option<String>,
    pub search: SearchConfig,
    pub http: HttpConfig,
    pub server: ServerConfig,
}

impl ScoutConfig {
    pub fn resolve_youtube_embed_base(&self) -> String {
        pick(
            &self.youtube_embed_base,
            ENV_YOUTUBE_EMBED_BASE,
            DEFAULT_YOUTUBE_EMBED_BASE,
        )
    }
}

/// Load `cinescout.json` from standard locations.
///
/// Search order (first found wins):
/// 1. `CINESCOUT_CONFIG` env var path
/// 2. `./cinescout.json`
/// 3. `../cinescout.json`
///
/// Missing file → `ScoutConfig::default()` (silent, all env-var fallbacks apply).
/// Parse error → log a warning, return `ScoutConfig::default()`.
pub fn load_scout_config() -> ScoutConfig {
    let mut candidates = vec![
        std::path::PathBuf::from("cinescout.json"),
        std::path::PathBuf::from("../cinescout.json"),
    ];
    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
        candidates.insert(0, std::path::PathBuf::from(env_path));
    }

    for path in &candidates {
        let Ok(contents) = std::fs::read_to_string(path) else {
            continue;
        };
        return match serde_json::from_str::<ScoutConfig>(&contents) {
            Ok(cfg) => {
                tracing::info!("cinescout.json loaded from {}", path.display());
                cfg
            }
            Err(e) => {
                tracing::warn!(
                    "cinescout.json parse error at {}: {}, using defaults",
                    path.display(),
                    e
                );
                ScoutConfig::default()
            }
        };
    }

    ScoutConfig::default()
}
