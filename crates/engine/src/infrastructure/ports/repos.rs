//! Repository port trait for the movie catalog.

use async_trait::async_trait;
use filmoteca_domain::{Movie, NewMovie, Rating, SearchFilter};

use super::error::RepoError;

/// Storage capability for movie records.
///
/// Every method is a single round trip and touches at most one row when it
/// writes. Title lookups are case-insensitive; callers pass the text as the
/// client sent it and the implementation folds it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepo: Send + Sync {
    /// All records, ordered by id.
    async fn list_all(&self) -> Result<Vec<Movie>, RepoError>;

    /// Insert a record and return it with its assigned id.
    ///
    /// A duplicate title fails with `RepoError::ConstraintViolation` and
    /// writes nothing.
    async fn insert(&self, movie: &NewMovie) -> Result<Movie, RepoError>;

    /// Delete the lowest-id record whose title contains `fragment`.
    async fn delete_first_matching(&self, fragment: &str) -> Result<Option<Movie>, RepoError>;

    /// Records matching every predicate of `filter`, ordered by id.
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Movie>, RepoError>;

    /// The lowest-id record whose title equals `title`.
    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, RepoError>;

    /// Set the rating of the lowest-id record whose title equals `title`.
    async fn update_rating(&self, title: &str, rating: Rating)
        -> Result<Option<Movie>, RepoError>;
}
