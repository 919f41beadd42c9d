use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("TMDB API error {status_code}: {message}")]
    Api { status_code: u16, message: String },
    #[error("Movie {movie_id} not found")]
    NotFound { movie_id: i64 },
}

impl TmdbError {
    /// True when the remote indicated the entity does not exist.
    /// Aggregate views drop the entity instead of failing the batch.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
