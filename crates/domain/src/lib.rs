//! Filmoteca domain: the movie record, its value objects, and the
//! validation that turns raw request fields into typed values.
//!
//! Nothing in this crate performs I/O.

pub mod entities;
pub mod error;
pub mod fields;
pub mod ids;
pub mod search;
pub mod validation;
pub mod value_objects;

pub use entities::{Movie, NewMovie};
pub use error::ValidationError;
pub use ids::MovieId;
pub use search::{Predicate, RawSearchQuery, SearchFilter};
pub use validation::{RawMovieInput, RawRatingInput};
pub use value_objects::{fold_case, DirectorName, MovieTitle, Rating, ReleaseYear};
