use tmdb::models::{Genre, Movie};

/// Reducer actions. Every state change goes through exactly one of these.
#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Replace the listing wholesale with a page-1 result.
    SetMoviesPage {
        results: Vec<Movie>,
        page: i64,
        total_pages: i64,
    },
    /// Append a follow-up page to the listing. The caller guarantees
    /// `page == current_page + 1` by serializing page requests.
    AppendMovies { results: Vec<Movie>, page: i64 },
    /// Replace search results wholesale.
    SetSearchResults(Vec<Movie>),
    SetLoading(bool),
    SetError(String),
    SetGenres(Vec<Genre>),
    /// Change the genre filter. Resets the pagination cursor, clears the
    /// listing, and bumps the listing generation. The only mechanism for
    /// invalidating the current listing.
    SetGenreFilter(Option<i64>),
    /// Seed favorites from persistence.
    SetFavorites(Vec<i64>),
    /// Add the id if absent, remove it if present.
    ToggleFavorite(i64),
}
