//! Movie catalog loader over HTTP

use super::client::{get, request_error};
use super::wire::MostPopularMovies;
use async_trait::async_trait;
use quiz_application::{LoaderError, MoviesLoader};
use quiz_domain::Movie;
use tracing::debug;

/// Maximum catalog size (5 MB)
const MAX_CATALOG_SIZE: usize = 5 * 1024 * 1024;

/// Fetches the movie catalog from a JSON endpoint
pub struct HttpMoviesLoader {
    client: reqwest::Client,
    url: String,
}

impl HttpMoviesLoader {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl MoviesLoader for HttpMoviesLoader {
    async fn load_movies(&self) -> Result<Vec<Movie>, LoaderError> {
        debug!("GET {}", self.url);
        let response = get(&self.client, &self.url).await?;

        let content_length = response.content_length().unwrap_or(0);
        if content_length > MAX_CATALOG_SIZE as u64 {
            return Err(LoaderError::InvalidResponse(format!(
                "Catalog too large: {} bytes (max: {} bytes)",
                content_length, MAX_CATALOG_SIZE
            )));
        }

        let body = response.bytes().await.map_err(request_error)?;
        if body.len() > MAX_CATALOG_SIZE {
            return Err(LoaderError::InvalidResponse(format!(
                "Catalog too large: {} bytes",
                body.len()
            )));
        }

        let response: MostPopularMovies = serde_json::from_slice(&body)
            .map_err(|e| LoaderError::InvalidResponse(e.to_string()))?;
        let movies = response.into_movies()?;

        debug!("Received {} movies", movies.len());
        Ok(movies)
    }
}
