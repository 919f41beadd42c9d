use crate::{
    models::{Genre, GenreListResponse},
    TmdbClient,
};

impl TmdbClient {
    /// Fetch the movie genre reference list. Unpaginated; fetched once at
    /// startup and treated as immutable reference data.
    pub async fn genre_list(&self) -> crate::Result<Vec<Genre>> {
        let url = self.url("/genre/movie/list");

        let response = self
            .client()
            .get(&url)
            .query(&[
                ("api_key", self.api_key()),
                ("language", self.lang.as_str()),
            ])
            .send()
            .await?;
        let list: GenreListResponse = self.handle_response(response).await?;
        Ok(list.genres)
    }
}
