use crate::{
    models::{Movie, PaginatedResponse},
    TmdbClient,
};

impl TmdbClient {
    /// Full-text movie search. Blank queries are the caller's
    /// responsibility to filter out before calling.
    pub async fn search_movies(
        &self,
        query: &str,
        page: i64,
    ) -> crate::Result<PaginatedResponse<Movie>> {
        let url = self.url("/search/movie");
        let page = page.to_string();

        let response = self
            .client()
            .get(&url)
            .query(&[
                ("api_key", self.api_key()),
                ("language", self.lang.as_str()),
                ("query", query),
                ("page", page.as_str()),
            ])
            .send()
            .await?;
        self.handle_response(response).await
    }
}
