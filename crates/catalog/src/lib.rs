//! Client-side state and sync layer for the movie catalog.
//!
//! Owns the reducer-driven [`CatalogState`], pagination accumulation,
//! genre-filter invalidation, persisted favorites and search history, and
//! the reconciliation of favorites against remote detail lookups.

mod action;
mod config;
mod favorites;
mod history;
mod provider;
mod reducer;
mod service;
mod state;
mod store;

pub use action::CatalogAction;
pub use config::{Config, ConfigError};
pub use favorites::{FavoritesReconciler, FavoritesView, FavoritesWatcher};
pub use history::{SearchHistory, HISTORY_KEY};
pub use provider::MovieCatalog;
pub use reducer::reduce;
pub use service::CatalogService;
pub use state::CatalogState;
pub use store::{CatalogStore, StateWatcher, FAVORITES_KEY};
