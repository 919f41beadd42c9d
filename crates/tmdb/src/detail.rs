use reqwest::StatusCode;

use crate::{models::MovieDetail, TmdbClient, TmdbError};

impl TmdbClient {
    /// Fetch the full detail record for a single movie.
    /// A remote 404 maps to [`TmdbError::NotFound`] so aggregate views can
    /// drop the entity without failing the whole operation.
    pub async fn movie_detail(&self, movie_id: i64) -> crate::Result<MovieDetail> {
        let url = self.url(&format!("/movie/{}", movie_id));

        let response = self
            .client()
            .get(&url)
            .query(&[
                ("api_key", self.api_key()),
                ("language", self.lang.as_str()),
            ])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(TmdbError::NotFound { movie_id });
        }
        self.handle_response(response).await
    }
}
