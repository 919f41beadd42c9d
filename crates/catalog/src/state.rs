use tmdb::models::{Genre, Movie};

/// The single state aggregate for catalog browsing, search, and favorites.
/// Mutated only through the reducer; external views are read-only clones.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    /// Current listing for the active filter context. Append-only within a
    /// genre session, replaced on page 1 or filter change.
    pub movies: Vec<Movie>,
    /// Search results, fully replaced per search. Independent of `movies`.
    pub search_results: Vec<Movie>,
    /// Favorited movie ids. Set semantics, insertion-ordered, no duplicates.
    pub favorites: Vec<i64>,
    /// True while any catalog fetch is outstanding.
    pub loading: bool,
    /// Last failure message, cleared on the next successful fetch.
    pub error: Option<String>,
    /// Genre reference data, fetched once.
    pub genres: Vec<Genre>,
    /// Active genre filter. `None` means no filter.
    pub selected_genre_id: Option<i64>,
    /// Pagination cursor for the active listing. 0 means nothing loaded.
    pub current_page: i64,
    pub total_pages: i64,
    /// Bumped on every genre-filter change. Listing responses carrying an
    /// older generation are stale and must be discarded.
    pub listing_generation: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            search_results: Vec::new(),
            favorites: Vec::new(),
            loading: false,
            error: None,
            genres: Vec::new(),
            selected_genre_id: None,
            current_page: 0,
            total_pages: 1,
            listing_generation: 0,
        }
    }
}

impl CatalogState {
    pub fn is_favorite(&self, movie_id: i64) -> bool {
        self.favorites.contains(&movie_id)
    }

    /// True when the pagination cursor has pages left to load.
    pub fn has_more_pages(&self) -> bool {
        self.current_page < self.total_pages
    }
}
