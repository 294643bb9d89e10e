//! JSON shapes of the movie catalog endpoint
//!
//! ```json
//! { "items": [{ "id": "tt0111161", "imDbRating": "9.2" }], "errorMessage": "" }
//! ```
//!
//! Ratings arrive as strings or numbers; anything unusable becomes `0.0`,
//! which the catalog later filters out.

use quiz_application::LoaderError;
use quiz_domain::Movie;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub(crate) struct MostPopularMovies {
    #[serde(default)]
    items: Vec<WireMovie>,
    #[serde(rename = "errorMessage", default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireMovie {
    id: String,
    #[serde(
        rename = "imDbRating",
        alias = "rating",
        default,
        deserialize_with = "deserialize_rating"
    )]
    rating: f64,
}

impl MostPopularMovies {
    /// Convert to domain movies, surfacing a service-side error message
    pub(crate) fn into_movies(self) -> Result<Vec<Movie>, LoaderError> {
        let error_message = self
            .error_message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        if let Some(message) = error_message {
            if self.items.is_empty() {
                return Err(LoaderError::Api(message));
            }
        }

        Ok(self
            .items
            .into_iter()
            .map(|m| Movie::new(m.id, m.rating))
            .collect())
    }
}

fn deserialize_rating<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRating {
        Number(f64),
        Text(String),
    }

    let rating = match Option::<RawRating>::deserialize(deserializer)? {
        Some(RawRating::Number(n)) => n,
        Some(RawRating::Text(s)) => s.trim().parse().unwrap_or(0.0),
        None => 0.0,
    };

    Ok(if rating.is_finite() { rating } else { 0.0 })
}
