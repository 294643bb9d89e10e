//! Question value object

use crate::movie::entities::Movie;

/// Fixed prompt shown with every poster
pub const QUESTION_PROMPT: &str = "Is the rating of this movie greater than 7?";

/// Ratings strictly above this value answer "yes"
pub const RATING_THRESHOLD: f64 = 7.0;

/// A yes/no question about a movie poster (Value Object)
///
/// Derived from a [`Movie`] and its poster bytes, never fetched directly.
/// Handed to the presentation layer exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    movie_id: String,
    image: Vec<u8>,
    text: String,
    correct_answer: bool,
}

impl Question {
    /// Derive a question from its source movie and poster bytes
    pub fn from_movie(movie: &Movie, image: Vec<u8>) -> Self {
        Self {
            movie_id: movie.id().to_string(),
            image,
            text: QUESTION_PROMPT.to_string(),
            correct_answer: movie.rating() > RATING_THRESHOLD,
        }
    }

    /// Id of the movie this question was built from
    pub fn movie_id(&self) -> &str {
        &self.movie_id
    }

    /// Raw poster bytes (opaque, not decoded)
    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn correct_answer(&self) -> bool {
        self.correct_answer
    }

    /// Check a player's yes/no answer
    pub fn is_correct(&self, answer: bool) -> bool {
        answer == self.correct_answer
    }
}
