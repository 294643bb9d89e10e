//! Movie entity

use serde::{Deserialize, Serialize};

/// A movie received from the remote catalog (Entity)
///
/// Immutable once received. A rating of exactly `0.0` means the service has
/// no usable rating for the movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    id: String,
    rating: f64,
}

impl Movie {
    pub fn new(id: impl Into<String>, rating: f64) -> Self {
        Self {
            id: id.into(),
            rating,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Whether this movie can be used as a question source
    pub fn has_rating(&self) -> bool {
        self.rating != 0.0
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.1})", self.id, self.rating)
    }
}
