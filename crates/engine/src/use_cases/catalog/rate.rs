//! Update the rating of a movie looked up by exact title.

use std::sync::Arc;

use filmoteca_domain::{Movie, RawRatingInput};

use crate::infrastructure::ports::MovieRepo;

use super::CatalogError;

pub struct RateMovie {
    repo: Arc<dyn MovieRepo>,
}

impl RateMovie {
    pub fn new(repo: Arc<dyn MovieRepo>) -> Self {
        Self { repo }
    }

    /// Replace the rating of the movie whose title equals `title`, ignoring
    /// case. Unlike removal, a partial title does not match.
    ///
    /// An unknown title is reported before the body is validated.
    pub async fn execute(&self, title: &str, input: RawRatingInput) -> Result<Movie, CatalogError> {
        if self.repo.find_by_title(title).await?.is_none() {
            return Err(CatalogError::not_found(title));
        }

        let rating = input.validate()?;

        // The movie may have been removed since the lookup.
        let movie = self
            .repo
            .update_rating(title, rating)
            .await?
            .ok_or_else(|| CatalogError::not_found(title))?;

        tracing::info!(id = %movie.id(), title = %movie.title(), rating = %rating, "Movie rated");
        Ok(movie)
    }
}
