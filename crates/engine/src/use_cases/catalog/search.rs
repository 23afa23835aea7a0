//! Search the catalog by title, director, year or rating.

use std::sync::Arc;

use filmoteca_domain::{Movie, RawSearchQuery, SearchFilter};

use crate::infrastructure::ports::MovieRepo;

use super::CatalogError;

pub struct SearchMovies {
    repo: Arc<dyn MovieRepo>,
}

impl SearchMovies {
    pub fn new(repo: Arc<dyn MovieRepo>) -> Self {
        Self { repo }
    }

    /// An empty result is a success, not `NotFound`.
    pub async fn execute(&self, query: RawSearchQuery) -> Result<Vec<Movie>, CatalogError> {
        let filter = SearchFilter::from_query(query)?;
        let movies = self.repo.search(&filter).await?;
        tracing::debug!(
            predicates = filter.predicates().len(),
            matches = movies.len(),
            "Movie search"
        );
        Ok(movies)
    }
}
