use std::sync::Arc;

use parking_lot::Mutex;
use storage::KeyValueStore;
use tokio::sync::watch;

use crate::{reduce, CatalogAction, CatalogState};

/// Storage key for the persisted favorites id list (JSON integer array).
pub const FAVORITES_KEY: &str = "tmdb_favorites_v1";

/// Receiver for catalog state changes.
pub type StateWatcher = watch::Receiver<CatalogState>;

/// State-owning store: applies the reducer atomically and broadcasts the
/// new state to subscribers. Favorites are mirrored to persistent storage
/// as a best-effort side effect.
pub struct CatalogStore {
    sender: watch::Sender<CatalogState>,
    receiver: watch::Receiver<CatalogState>,
    // Serializes the read-reduce-send sequence so every dispatched action
    // is applied against the state it was computed from.
    dispatch_lock: Mutex<()>,
    persistence: Arc<dyn KeyValueStore>,
}

impl CatalogStore {
    /// Initialize the store, seeding favorites from persistence. A missing,
    /// unreadable, or corrupt entry degrades to an empty favorites list.
    pub async fn load(persistence: Arc<dyn KeyValueStore>) -> Self {
        let mut state = CatalogState::default();

        match persistence.get(FAVORITES_KEY).await {
            Ok(Some(json)) => match serde_json::from_str::<Vec<i64>>(&json) {
                Ok(ids) => state = reduce(&state, CatalogAction::SetFavorites(ids)),
                Err(e) => tracing::warn!("Ignoring corrupt favorites entry: {}", e),
            },
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to load favorites from storage: {}", e),
        }

        let (sender, receiver) = watch::channel(state);
        Self {
            sender,
            receiver,
            dispatch_lock: Mutex::new(()),
            persistence,
        }
    }

    /// Current state (fast, no I/O).
    pub fn get(&self) -> CatalogState {
        self.receiver.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> StateWatcher {
        self.receiver.clone()
    }

    /// Apply an action through the reducer and broadcast the new state.
    /// When the favorites set changed, the new list is persisted after the
    /// broadcast; persistence failures are logged, never surfaced.
    pub async fn dispatch(&self, action: CatalogAction) {
        let changed_favorites = {
            let _guard = self.dispatch_lock.lock();
            let current = self.receiver.borrow().clone();
            let next = reduce(&current, action);
            let changed = (next.favorites != current.favorites).then(|| next.favorites.clone());
            let _ = self.sender.send(next);
            changed
        };

        if let Some(favorites) = changed_favorites {
            self.persist_favorites(&favorites).await;
        }
    }

    async fn persist_favorites(&self, favorites: &[i64]) {
        let json = match serde_json::to_string(favorites) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to encode favorites: {}", e);
                return;
            }
        };
        if let Err(e) = self.persistence.set(FAVORITES_KEY, &json).await {
            tracing::warn!("Failed to persist favorites: {}", e);
        }
    }
}
