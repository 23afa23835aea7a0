//! List every movie in the catalog.

use std::sync::Arc;

use filmoteca_domain::Movie;

use crate::infrastructure::ports::MovieRepo;

use super::CatalogError;

pub struct ListMovies {
    repo: Arc<dyn MovieRepo>,
}

impl ListMovies {
    pub fn new(repo: Arc<dyn MovieRepo>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<Vec<Movie>, CatalogError> {
        Ok(self.repo.list_all().await?)
    }
}
