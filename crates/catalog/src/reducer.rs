use crate::{CatalogAction, CatalogState};

/// Pure transition function: (state, action) -> state. No I/O, no side
/// effects; applied atomically by the store.
pub fn reduce(state: &CatalogState, action: CatalogAction) -> CatalogState {
    match action {
        CatalogAction::SetMoviesPage {
            results,
            page,
            total_pages,
        } => CatalogState {
            movies: results,
            current_page: page,
            total_pages,
            loading: false,
            error: None,
            ..state.clone()
        },
        CatalogAction::AppendMovies { results, page } => {
            let mut movies = state.movies.clone();
            movies.extend(results);
            CatalogState {
                movies,
                current_page: page,
                loading: false,
                error: None,
                ..state.clone()
            }
        }
        CatalogAction::SetSearchResults(results) => CatalogState {
            search_results: results,
            loading: false,
            error: None,
            ..state.clone()
        },
        CatalogAction::SetLoading(loading) => CatalogState {
            loading,
            ..state.clone()
        },
        // Prior movies/search results are kept on failure: stale data with
        // an error banner instead of a blank screen.
        CatalogAction::SetError(message) => CatalogState {
            error: Some(message),
            loading: false,
            ..state.clone()
        },
        CatalogAction::SetGenres(genres) => CatalogState {
            genres,
            ..state.clone()
        },
        CatalogAction::SetGenreFilter(genre_id) => CatalogState {
            selected_genre_id: genre_id,
            movies: Vec::new(),
            current_page: 0,
            total_pages: 1,
            listing_generation: state.listing_generation + 1,
            ..state.clone()
        },
        CatalogAction::SetFavorites(ids) => {
            let mut favorites = Vec::with_capacity(ids.len());
            for id in ids {
                if !favorites.contains(&id) {
                    favorites.push(id);
                }
            }
            CatalogState {
                favorites,
                ..state.clone()
            }
        }
        CatalogAction::ToggleFavorite(id) => {
            let mut favorites = state.favorites.clone();
            if let Some(pos) = favorites.iter().position(|&f| f == id) {
                favorites.remove(pos);
            } else {
                favorites.push(id);
            }
            CatalogState {
                favorites,
                ..state.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tmdb::models::Movie;

    fn movie(id: i64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: String::new(),
            release_date: "2023-01-01".to_string(),
            poster_path: None,
            backdrop_path: None,
            vote_average: 7.0,
            genre_ids: None,
        }
    }

    #[test]
    fn test_page_one_replaces_listing() {
        let state = CatalogState {
            movies: vec![movie(99, "Old")],
            ..CatalogState::default()
        };

        let next = reduce(
            &state,
            CatalogAction::SetMoviesPage {
                results: vec![movie(1, "A"), movie(2, "B")],
                page: 1,
                total_pages: 5,
            },
        );

        assert_eq!(next.movies.len(), 2);
        assert_eq!(next.movies[0].id, 1);
        assert_eq!(next.current_page, 1);
        assert_eq!(next.total_pages, 5);
        assert!(!next.loading);
        assert_eq!(next.error, None);
    }

    #[test]
    fn test_page_two_appends_without_duplicating() {
        let state = reduce(
            &CatalogState::default(),
            CatalogAction::SetMoviesPage {
                results: vec![movie(1, "A"), movie(2, "B")],
                page: 1,
                total_pages: 3,
            },
        );

        let next = reduce(
            &state,
            CatalogAction::AppendMovies {
                results: vec![movie(3, "C")],
                page: 2,
            },
        );

        let ids: Vec<i64> = next.movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(next.current_page, 2);
        assert_eq!(next.total_pages, 3);
    }

    #[test]
    fn test_genre_switch_resets_cursor_synchronously() {
        let state = CatalogState {
            movies: vec![movie(1, "A")],
            current_page: 4,
            total_pages: 9,
            listing_generation: 2,
            ..CatalogState::default()
        };

        let next = reduce(&state, CatalogAction::SetGenreFilter(Some(28)));

        assert_eq!(next.selected_genre_id, Some(28));
        assert!(next.movies.is_empty());
        assert_eq!(next.current_page, 0);
        assert_eq!(next.total_pages, 1);
        assert_eq!(next.listing_generation, 3);
    }

    #[test]
    fn test_toggle_favorite_twice_is_identity() {
        let state = CatalogState {
            favorites: vec![3, 9],
            ..CatalogState::default()
        };

        let once = reduce(&state, CatalogAction::ToggleFavorite(7));
        assert_eq!(once.favorites, vec![3, 9, 7]);

        let twice = reduce(&once, CatalogAction::ToggleFavorite(7));
        assert_eq!(twice.favorites, state.favorites);
    }

    #[test]
    fn test_error_keeps_last_known_good_data() {
        let state = CatalogState {
            movies: vec![movie(1, "A")],
            search_results: vec![movie(2, "B")],
            loading: true,
            ..CatalogState::default()
        };

        let next = reduce(&state, CatalogAction::SetError("Failed to load movies".into()));

        assert_eq!(next.error.as_deref(), Some("Failed to load movies"));
        assert!(!next.loading);
        assert_eq!(next.movies.len(), 1);
        assert_eq!(next.search_results.len(), 1);
    }

    #[test]
    fn test_successful_fetch_clears_error() {
        let state = CatalogState {
            error: Some("Failed to load movies".into()),
            ..CatalogState::default()
        };

        let next = reduce(
            &state,
            CatalogAction::SetMoviesPage {
                results: vec![movie(1, "A")],
                page: 1,
                total_pages: 1,
            },
        );
        assert_eq!(next.error, None);
    }

    #[test]
    fn test_set_favorites_deduplicates() {
        let next = reduce(
            &CatalogState::default(),
            CatalogAction::SetFavorites(vec![7, 42, 7, 9, 42]),
        );
        assert_eq!(next.favorites, vec![7, 42, 9]);
    }

    #[test]
    fn test_search_results_do_not_touch_listing() {
        let state = CatalogState {
            movies: vec![movie(1, "A")],
            current_page: 2,
            ..CatalogState::default()
        };

        let next = reduce(
            &state,
            CatalogAction::SetSearchResults(vec![movie(5, "S")]),
        );

        assert_eq!(next.search_results.len(), 1);
        assert_eq!(next.movies.len(), 1);
        assert_eq!(next.current_page, 2);
    }
}
