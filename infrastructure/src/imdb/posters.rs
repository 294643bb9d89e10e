//! Poster loader over HTTP

use super::client::{get, request_error};
use crate::config::FileApiConfig;
use async_trait::async_trait;
use quiz_application::{LoaderError, PostersLoader};
use tracing::debug;

/// Maximum poster size (10 MB)
const MAX_POSTER_SIZE: usize = 10 * 1024 * 1024;

/// Fetches poster bytes from a URL template
pub struct HttpPostersLoader {
    client: reqwest::Client,
    config: FileApiConfig,
}

impl HttpPostersLoader {
    pub fn new(client: reqwest::Client, config: FileApiConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl PostersLoader for HttpPostersLoader {
    async fn load_poster(&self, movie_id: &str) -> Result<Vec<u8>, LoaderError> {
        let url = self.config.poster_url_for(movie_id);
        debug!("GET {}", url);

        let response = get(&self.client, &url).await?;

        let content_length = response.content_length().unwrap_or(0);
        if content_length > MAX_POSTER_SIZE as u64 {
            return Err(LoaderError::InvalidResponse(format!(
                "Poster too large: {} bytes (max: {} bytes)",
                content_length, MAX_POSTER_SIZE
            )));
        }

        let body = response.bytes().await.map_err(request_error)?;
        if body.is_empty() {
            return Err(LoaderError::InvalidResponse(format!(
                "Empty poster for {}",
                movie_id
            )));
        }
        if body.len() > MAX_POSTER_SIZE {
            return Err(LoaderError::InvalidResponse(format!(
                "Poster too large: {} bytes",
                body.len()
            )));
        }

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn loader_for(server: &MockServer) -> HttpPostersLoader {
        let config = FileApiConfig {
            poster_url: format!("{}/posters/{{id}}.jpg", server.uri()),
            ..Default::default()
        };
        HttpPostersLoader::new(reqwest::Client::new(), config)
    }

    #[tokio::test]
    async fn test_load_poster_substitutes_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posters/tt42.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF]))
            .expect(1)
            .mount(&server)
            .await;

        let bytes = loader_for(&server).load_poster("tt42").await.unwrap();

        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF]);
    }

    #[tokio::test]
    async fn test_missing_poster_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = loader_for(&server).load_poster("tt0").await;

        assert_eq!(
            result,
            Err(LoaderError::Http {
                status: 404,
                reason: "Not Found".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_empty_poster_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let result = loader_for(&server).load_poster("tt1").await;

        assert!(matches!(result, Err(LoaderError::InvalidResponse(_))));
    }
}
