//! HTTP adapters for the remote movie service
//!
//! - [`HttpMoviesLoader`] implements [`MoviesLoader`](quiz_application::MoviesLoader)
//! - [`HttpPostersLoader`] implements [`PostersLoader`](quiz_application::PostersLoader)
//!
//! Both share one `reqwest::Client` built by [`http_client`]. Every call is a
//! single attempt; timeouts come from the client configuration.

mod client;
mod movies;
mod posters;
mod wire;

pub use client::http_client;
pub use movies::HttpMoviesLoader;
pub use posters::HttpPostersLoader;
