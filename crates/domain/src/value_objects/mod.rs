//! Value objects - Immutable objects defined by their attributes

mod names;
mod rating;
mod release_year;

pub use names::{fold_case, DirectorName, MovieTitle, MAX_TEXT_LENGTH};
pub use rating::{Rating, MAX_RATING, MIN_RATING};
pub use release_year::{ReleaseYear, MIN_RELEASE_YEAR};
