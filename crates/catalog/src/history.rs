use std::sync::Arc;

use storage::KeyValueStore;

/// Storage key for the persisted search history (JSON string array).
pub const HISTORY_KEY: &str = "user_search_history";

const MAX_HISTORY_ITEMS: usize = 10;

/// Recent-search history: most recent first, exact-match deduplicated,
/// capped at ten entries. All operations are best-effort; persistence
/// failures are logged and the caller sees an empty history instead of
/// an error.
#[derive(Clone)]
pub struct SearchHistory {
    store: Arc<dyn KeyValueStore>,
}

impl SearchHistory {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Record a search term. Blank terms are ignored. An existing
    /// occurrence moves to the front rather than duplicating.
    pub async fn save_term(&self, term: &str) {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return;
        }

        let mut history = self.recent_terms().await;
        history.retain(|item| item != trimmed);
        history.insert(0, trimmed.to_string());
        history.truncate(MAX_HISTORY_ITEMS);

        let json = match serde_json::to_string(&history) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to encode search history: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(HISTORY_KEY, &json).await {
            tracing::warn!("Failed to save search history: {}", e);
        }
    }

    /// The persisted history, most recent first. Empty when missing or
    /// unreadable.
    pub async fn recent_terms(&self) -> Vec<String> {
        match self.store.get(HISTORY_KEY).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(history) => history,
                Err(e) => {
                    tracing::warn!("Ignoring corrupt search history: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read search history: {}", e);
                Vec::new()
            }
        }
    }

    /// Drop the persisted history entirely.
    pub async fn clear(&self) {
        if let Err(e) = self.store.remove(HISTORY_KEY).await {
            tracing::warn!("Failed to clear search history: {}", e);
        }
    }
}
