//! Add a movie to the catalog.

use std::sync::Arc;

use chrono::Datelike;
use filmoteca_domain::{Movie, RawMovieInput};

use crate::infrastructure::ports::{ClockPort, MovieRepo, RepoError};

use super::CatalogError;

pub struct AddMovie {
    repo: Arc<dyn MovieRepo>,
    clock: Arc<dyn ClockPort>,
}

impl AddMovie {
    pub fn new(repo: Arc<dyn MovieRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    /// Validate `input` and insert it.
    ///
    /// The upper bound on the release year is the current UTC year.
    pub async fn execute(&self, input: RawMovieInput) -> Result<Movie, CatalogError> {
        let current_year = self.clock.now().year();
        let draft = input.validate(current_year)?;

        match self.repo.insert(&draft).await {
            Ok(movie) => {
                tracing::info!(id = %movie.id(), title = %movie.title(), "Movie added");
                Ok(movie)
            }
            Err(RepoError::ConstraintViolation(_)) => {
                tracing::debug!(title = %draft.title(), "Rejected duplicate title");
                Err(CatalogError::Conflict {
                    title: draft.title().to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}
