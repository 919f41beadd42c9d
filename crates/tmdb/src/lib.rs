mod client;
mod detail;
mod discover;
mod error;
mod genres;
mod image;
pub mod models;
mod search;

pub use client::TmdbClient;
pub use error::TmdbError;
pub use image::{image_url, poster_url, DEFAULT_IMAGE_SIZE};

pub type Result<T> = std::result::Result<T, TmdbError>;
