use async_trait::async_trait;

use tmdb::models::{Genre, Movie, MovieDetail, PaginatedResponse};
use tmdb::TmdbClient;

/// Remote catalog boundary. The state layer depends on this seam so tests
/// can substitute an in-memory fake for the TMDB client.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// One listing page: popular movies, optionally filtered by genre.
    async fn fetch_popular(
        &self,
        genre_id: Option<i64>,
        page: i64,
    ) -> tmdb::Result<PaginatedResponse<Movie>>;

    /// One page of full-text search results.
    async fn search(&self, query: &str, page: i64) -> tmdb::Result<PaginatedResponse<Movie>>;

    /// Full detail record for a single movie.
    async fn movie_detail(&self, movie_id: i64) -> tmdb::Result<MovieDetail>;

    /// The genre reference list.
    async fn genre_list(&self) -> tmdb::Result<Vec<Genre>>;
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn fetch_popular(
        &self,
        genre_id: Option<i64>,
        page: i64,
    ) -> tmdb::Result<PaginatedResponse<Movie>> {
        TmdbClient::fetch_popular(self, genre_id, page).await
    }

    async fn search(&self, query: &str, page: i64) -> tmdb::Result<PaginatedResponse<Movie>> {
        self.search_movies(query, page).await
    }

    async fn movie_detail(&self, movie_id: i64) -> tmdb::Result<MovieDetail> {
        TmdbClient::movie_detail(self, movie_id).await
    }

    async fn genre_list(&self) -> tmdb::Result<Vec<Genre>> {
        TmdbClient::genre_list(self).await
    }
}
