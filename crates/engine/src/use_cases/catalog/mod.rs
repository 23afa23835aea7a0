//! Catalog use cases: the five operations exposed over HTTP.
//!
//! Each use case validates its raw input with the domain crate before
//! touching the repository, so the store never sees an out-of-range value.

mod add;
mod list;
mod rate;
mod remove;
mod search;

pub use add::AddMovie;
pub use list::ListMovies;
pub use rate::RateMovie;
pub use remove::RemoveMovie;
pub use search::SearchMovies;

use std::sync::Arc;

use filmoteca_domain::ValidationError;

use crate::infrastructure::ports::{ClockPort, MovieRepo, RepoError};

/// Shared error type for catalog use cases.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Movie not found: {title}")]
    NotFound { title: String },
    #[error("Movie already exists: {title}")]
    Conflict { title: String },
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl CatalogError {
    pub fn not_found(title: impl Into<String>) -> Self {
        Self::NotFound {
            title: title.into(),
        }
    }
}

/// Container for catalog use cases.
pub struct CatalogUseCases {
    pub list: ListMovies,
    pub add: AddMovie,
    pub search: SearchMovies,
    pub remove: RemoveMovie,
    pub rate: RateMovie,
}

impl CatalogUseCases {
    pub fn new(repo: Arc<dyn MovieRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            list: ListMovies::new(repo.clone()),
            add: AddMovie::new(repo.clone(), clock),
            search: SearchMovies::new(repo.clone()),
            remove: RemoveMovie::new(repo.clone()),
            rate: RateMovie::new(repo),
        }
    }
}
