use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL of the search backend (e.g. "http://localhost:9000")
    pub base_url: String,
    /// Result limit when the caller gives none
    pub default_limit: usize,
    /// Result limit for wildcard ("match everything") queries
    pub wildcard_limit: usize,
    /// HTTP connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9000".to_string(),
            default_limit: 100,
            wildcard_limit: 10_000,
            connect_timeout_secs: 10,
            request_timeout_secs: 60,
        }
    }
}

impl SearchConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("FILE_SEARCH_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(val) = std::env::var("FILE_SEARCH_DEFAULT_LIMIT") {
            if let Ok(v) = val.parse() {
                config.default_limit = v;
            }
        }
        if let Ok(val) = std::env::var("FILE_SEARCH_WILDCARD_LIMIT") {
            if let Ok(v) = val.parse() {
                config.wildcard_limit = v;
            }
        }
        if let Ok(val) = std::env::var("FILE_SEARCH_CONNECT_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.connect_timeout_secs = v;
            }
        }
        if let Ok(val) = std::env::var("FILE_SEARCH_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.request_timeout_secs = v;
            }
        }

        config
    }

    /// Full URL of the search endpoint.
    pub fn search_url(&self) -> String {
        format!("{}/api/search", self.base_url.trim_end_matches('/'))
    }
}
