use crate::{
    models::{Movie, PaginatedResponse},
    TmdbClient,
};

impl TmdbClient {
    /// Fetch one page of the unfiltered popular-movies listing.
    pub async fn popular_movies(&self, page: i64) -> crate::Result<PaginatedResponse<Movie>> {
        let url = self.url("/movie/popular");
        let page = page.to_string();

        let response = self
            .client()
            .get(&url)
            .query(&[
                ("api_key", self.api_key()),
                ("language", self.lang.as_str()),
                ("page", page.as_str()),
            ])
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Fetch one page of movies for a genre, sorted by descending popularity.
    pub async fn discover_movies(
        &self,
        genre_id: i64,
        page: i64,
    ) -> crate::Result<PaginatedResponse<Movie>> {
        let url = self.url("/discover/movie");
        let page = page.to_string();
        let genre = genre_id.to_string();

        let response = self
            .client()
            .get(&url)
            .query(&[
                ("api_key", self.api_key()),
                ("language", self.lang.as_str()),
                ("with_genres", genre.as_str()),
                ("sort_by", "popularity.desc"),
                ("page", page.as_str()),
            ])
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Fetch a listing page for the given filter context: the popular
    /// endpoint when no genre is selected, discover otherwise.
    pub async fn fetch_popular(
        &self,
        genre_id: Option<i64>,
        page: i64,
    ) -> crate::Result<PaginatedResponse<Movie>> {
        match genre_id {
            Some(genre_id) => self.discover_movies(genre_id, page).await,
            None => self.popular_movies(page).await,
        }
    }
}
