//! Shared HTTP client setup and error mapping

use crate::config::FileApiConfig;
use quiz_application::LoaderError;
use reqwest::{Response, StatusCode};
use std::time::Duration;

/// Build the HTTP client used by both loaders
pub fn http_client(config: &FileApiConfig) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
    if config.timeout_seconds > 0 {
        builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
    }
    builder.build()
}

/// Send a GET request and reject non-success statuses
pub(crate) async fn get(client: &reqwest::Client, url: &str) -> Result<Response, LoaderError> {
    let response = client.get(url).send().await.map_err(request_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(http_error(status));
    }

    Ok(response)
}

pub(crate) fn request_error(error: reqwest::Error) -> LoaderError {
    if error.is_timeout() {
        LoaderError::Timeout
    } else if error.is_decode() || error.is_body() {
        LoaderError::InvalidResponse(error.to_string())
    } else {
        LoaderError::Network(error.to_string())
    }
}

fn http_error(status: StatusCode) -> LoaderError {
    LoaderError::Http {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    }
}
