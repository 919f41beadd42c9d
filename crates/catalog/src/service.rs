use std::sync::Arc;

use storage::{FileStore, KeyValueStore};
use tmdb::TmdbClient;

use crate::{CatalogAction, CatalogStore, Config, MovieCatalog, SearchHistory};

/// Orchestrates remote fetches into reducer dispatches, enforcing the
/// orderings the runtime does not provide: page requests are serialized
/// through the loading flag, and listing responses from a superseded genre
/// filter are rejected by generation comparison.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<CatalogStore>,
    catalog: Arc<dyn MovieCatalog>,
    history: SearchHistory,
}

impl CatalogService {
    /// Build the service: seeds catalog state (favorites) from persistence
    /// and shares the same store for search history.
    pub async fn new(
        catalog: Arc<dyn MovieCatalog>,
        persistence: Arc<dyn KeyValueStore>,
    ) -> Self {
        let store = Arc::new(CatalogStore::load(Arc::clone(&persistence)).await);
        let history = SearchHistory::new(persistence);
        Self {
            store,
            catalog,
            history,
        }
    }

    /// Build the service against the real TMDB API and a file-backed store
    /// under the configured data directory.
    pub async fn from_config(config: &Config) -> Self {
        let client = TmdbClient::with_client(reqwest::Client::new(), config.api_key.as_str())
            .with_language(config.language.as_str());
        let persistence = FileStore::new(config.store_path());
        Self::new(Arc::new(client), Arc::new(persistence)).await
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Fetch the genre reference list once at startup.
    pub async fn load_genres(&self) {
        match self.catalog.genre_list().await {
            Ok(genres) => self.store.dispatch(CatalogAction::SetGenres(genres)).await,
            Err(e) => {
                tracing::warn!("Genre list fetch failed: {}", e);
                self.store
                    .dispatch(CatalogAction::SetError("Failed to load genres".into()))
                    .await;
            }
        }
    }

    /// Load page 1 for the current filter context, replacing the listing.
    pub async fn load_first_page(&self) {
        self.load_page(1).await;
    }

    /// Load the next listing page. Ignored while a fetch is already in
    /// flight or when the cursor is exhausted.
    pub async fn load_next_page(&self) {
        let state = self.store.get();
        if state.loading {
            tracing::debug!("Ignoring page request while a fetch is in flight");
            return;
        }
        if !state.has_more_pages() {
            return;
        }
        self.load_page(state.current_page + 1).await;
    }

    /// Switch the genre filter. The cursor resets synchronously, before
    /// any network response can land, then page 1 is fetched for the new
    /// filter. Any in-flight fetch for the old filter becomes stale.
    pub async fn select_genre(&self, genre_id: Option<i64>) {
        self.store
            .dispatch(CatalogAction::SetGenreFilter(genre_id))
            .await;
        self.load_page(1).await;
    }

    /// Full-text search. A blank query clears results without a remote
    /// call. The trimmed term is recorded in search history at submit time.
    pub async fn search(&self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.store
                .dispatch(CatalogAction::SetSearchResults(Vec::new()))
                .await;
            return;
        }

        self.history.save_term(trimmed).await;
        self.store.dispatch(CatalogAction::SetLoading(true)).await;

        match self.catalog.search(trimmed, 1).await {
            Ok(response) => {
                self.store
                    .dispatch(CatalogAction::SetSearchResults(response.results))
                    .await;
            }
            Err(e) => {
                tracing::warn!("Search failed: {}", e);
                self.store
                    .dispatch(CatalogAction::SetError("Search failed".into()))
                    .await;
            }
        }
    }

    pub async fn toggle_favorite(&self, movie_id: i64) {
        self.store
            .dispatch(CatalogAction::ToggleFavorite(movie_id))
            .await;
    }

    async fn load_page(&self, page: i64) {
        let before = self.store.get();
        let generation = before.listing_generation;
        let genre_id = before.selected_genre_id;

        self.store.dispatch(CatalogAction::SetLoading(true)).await;
        let result = self.catalog.fetch_popular(genre_id, page).await;

        // The filter may have changed while the request was in flight.
        if self.store.get().listing_generation != generation {
            tracing::debug!("Dropping stale listing response for generation {}", generation);
            return;
        }

        match result {
            Ok(response) => {
                let action = if page == 1 {
                    CatalogAction::SetMoviesPage {
                        results: response.results,
                        page: response.page,
                        total_pages: response.total_pages,
                    }
                } else {
                    CatalogAction::AppendMovies {
                        results: response.results,
                        page: response.page,
                    }
                };
                self.store.dispatch(action).await;
            }
            Err(e) => {
                tracing::warn!("Listing fetch failed: {}", e);
                self.store
                    .dispatch(CatalogAction::SetError("Failed to load movies".into()))
                    .await;
            }
        }
    }
}
