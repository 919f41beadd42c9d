use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    pub genre_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Full detail record for a single movie. A superset of [`Movie`]:
/// always reducible to one via [`MovieDetail::to_movie`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub runtime: i64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub budget: i64,
    #[serde(default)]
    pub revenue: i64,
    #[serde(default)]
    pub tagline: String,
}

impl MovieDetail {
    /// Project down to a listing-level record, dropping detail-only fields.
    pub fn to_movie(&self) -> Movie {
        Movie {
            id: self.id,
            title: self.title.clone(),
            overview: self.overview.clone(),
            release_date: self.release_date.clone(),
            poster_path: self.poster_path.clone(),
            backdrop_path: self.backdrop_path.clone(),
            vote_average: self.vote_average,
            genre_ids: Some(self.genres.iter().map(|g| g.id).collect()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub page: i64,
    pub results: Vec<T>,
    pub total_pages: i64,
    pub total_results: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreListResponse {
    pub genres: Vec<Genre>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_listing_page() {
        let json = r#"{
            "page": 1,
            "results": [
                {
                    "id": 603,
                    "title": "The Matrix",
                    "overview": "A computer hacker learns the truth.",
                    "release_date": "1999-03-30",
                    "poster_path": "/matrix.jpg",
                    "backdrop_path": null,
                    "vote_average": 8.2,
                    "genre_ids": [28, 878]
                }
            ],
            "total_pages": 42,
            "total_results": 833
        }"#;

        let page: PaginatedResponse<Movie> = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 42);
        assert_eq!(page.results.len(), 1);

        let movie = &page.results[0];
        assert_eq!(movie.id, 603);
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.poster_path.as_deref(), Some("/matrix.jpg"));
        assert_eq!(movie.backdrop_path, None);
        assert_eq!(movie.genre_ids.as_deref(), Some(&[28, 878][..]));
    }

    #[test]
    fn test_deserialize_movie_missing_optional_fields() {
        // TMDB omits release_date on unreleased titles
        let json = r#"{
            "id": 1,
            "title": "Untitled Project",
            "poster_path": null,
            "backdrop_path": null
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.release_date, "");
        assert_eq!(movie.overview, "");
        assert_eq!(movie.vote_average, 0.0);
        assert_eq!(movie.genre_ids, None);
    }

    #[test]
    fn test_detail_projects_to_movie() {
        let detail = MovieDetail {
            id: 27205,
            title: "Inception".to_string(),
            overview: "A thief who steals corporate secrets.".to_string(),
            release_date: "2010-07-15".to_string(),
            poster_path: Some("/inception.jpg".to_string()),
            backdrop_path: None,
            vote_average: 8.4,
            runtime: 148,
            genres: vec![
                Genre {
                    id: 28,
                    name: "Action".to_string(),
                },
                Genre {
                    id: 878,
                    name: "Science Fiction".to_string(),
                },
            ],
            budget: 160_000_000,
            revenue: 825_532_764,
            tagline: "Your mind is the scene of the crime.".to_string(),
        };

        let movie = detail.to_movie();
        assert_eq!(movie.id, 27205);
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.poster_path.as_deref(), Some("/inception.jpg"));
        assert_eq!(movie.genre_ids.as_deref(), Some(&[28, 878][..]));
    }
}
