//! Remove a movie by partial title.

use std::sync::Arc;

use filmoteca_domain::Movie;

use crate::infrastructure::ports::MovieRepo;

use super::CatalogError;

pub struct RemoveMovie {
    repo: Arc<dyn MovieRepo>,
}

impl RemoveMovie {
    pub fn new(repo: Arc<dyn MovieRepo>) -> Self {
        Self { repo }
    }

    /// Delete the first movie (lowest id) whose title contains `fragment`,
    /// ignoring case.
    pub async fn execute(&self, fragment: &str) -> Result<Movie, CatalogError> {
        let movie = self
            .repo
            .delete_first_matching(fragment)
            .await?
            .ok_or_else(|| CatalogError::not_found(fragment))?;

        tracing::info!(id = %movie.id(), title = %movie.title(), "Movie removed");
        Ok(movie)
    }
}
