//! Posters loader port
//!
//! Defines the interface for fetching poster images by movie id.

use super::movies_loader::LoaderError;
use async_trait::async_trait;

/// Loader for raw poster bytes
///
/// Must tolerate concurrent calls for different movie ids. Bytes are opaque
/// to the application; decoding is a presentation concern.
#[async_trait]
pub trait PostersLoader: Send + Sync {
    async fn load_poster(&self, movie_id: &str) -> Result<Vec<u8>, LoaderError>;
}
