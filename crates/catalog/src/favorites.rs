use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::watch;

use tmdb::models::Movie;

use crate::{CatalogState, MovieCatalog};

/// Display-ready favorites list plus an aggregate indicator that remote
/// lookups for not-locally-cached favorites are still outstanding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesView {
    pub movies: Vec<Movie>,
    pub loading_missing: bool,
}

/// Receiver for favorites view changes.
pub type FavoritesWatcher = watch::Receiver<FavoritesView>;

/// Derives the favorites display list by merging locally cached movies with
/// on-demand detail fetches for favorite ids absent from every in-memory
/// list. Each derivation carries a generation so results arriving after a
/// newer derivation started are dropped instead of applied.
pub struct FavoritesReconciler {
    catalog: Arc<dyn MovieCatalog>,
    generation: AtomicU64,
    sender: watch::Sender<FavoritesView>,
    receiver: watch::Receiver<FavoritesView>,
}

impl FavoritesReconciler {
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        let (sender, receiver) = watch::channel(FavoritesView::default());
        Self {
            catalog,
            generation: AtomicU64::new(0),
            sender,
            receiver,
        }
    }

    /// Current view (fast, no I/O).
    pub fn view(&self) -> FavoritesView {
        self.receiver.borrow().clone()
    }

    /// Subscribe to view changes.
    pub fn subscribe(&self) -> FavoritesWatcher {
        self.receiver.clone()
    }

    /// Re-derive the favorites view from the given state. Call on every
    /// change to favorites, the listing, or search results; any derivation
    /// still in flight is superseded and its late results discarded.
    pub async fn refresh(&self, state: &CatalogState) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let mut local: HashMap<i64, &Movie> = HashMap::new();
        for movie in state.movies.iter().chain(state.search_results.iter()) {
            local.entry(movie.id).or_insert(movie);
        }

        let mut resolved = Vec::new();
        let mut missing = Vec::new();
        for &id in &state.favorites {
            match local.get(&id) {
                Some(movie) => resolved.push((*movie).clone()),
                None => missing.push(id),
            }
        }

        if missing.is_empty() {
            let _ = self.sender.send(FavoritesView {
                movies: resolved,
                loading_missing: false,
            });
            return;
        }

        // Locally resolvable favorites render immediately while the
        // missing ones are fetched.
        let _ = self.sender.send(FavoritesView {
            movies: resolved.clone(),
            loading_missing: true,
        });

        let fetches: Vec<_> = missing.iter().map(|&id| self.fetch_one(id)).collect();
        let fetched = join_all(fetches).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("Dropping superseded favorites derivation {}", generation);
            return;
        }

        let mut movies = resolved;
        movies.extend(fetched.into_iter().flatten());
        let _ = self.sender.send(FavoritesView {
            movies,
            loading_missing: false,
        });
    }

    /// Fetch one missing favorite. Failures are isolated per id: the movie
    /// is dropped from the view and the rest of the batch still renders.
    async fn fetch_one(&self, movie_id: i64) -> Option<Movie> {
        match self.catalog.movie_detail(movie_id).await {
            Ok(detail) => Some(detail.to_movie()),
            Err(e) => {
                tracing::warn!("Dropping favorite {} from view: {}", movie_id, e);
                None
            }
        }
    }
}
