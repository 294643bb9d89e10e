//! Remote service configuration from TOML (`[api]` section)

use serde::{Deserialize, Serialize};

/// Raw remote movie service configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// URL returning the movie catalog as JSON
    pub movies_url: String,
    /// Poster URL template; `{id}` is replaced with the movie id
    pub poster_url: String,
    /// Per-request timeout in seconds (0 disables the timeout)
    pub timeout_seconds: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl FileApiConfig {
    pub const ID_PLACEHOLDER: &'static str = "{id}";

    /// Poster URL for a movie id
    pub fn poster_url_for(&self, movie_id: &str) -> String {
        self.poster_url.replace(Self::ID_PLACEHOLDER, movie_id)
    }
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            movies_url: "http://localhost:8080/movies".to_string(),
            poster_url: "http://localhost:8080/posters/{id}".to_string(),
            timeout_seconds: 15,
            user_agent: concat!("movie-quiz/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
