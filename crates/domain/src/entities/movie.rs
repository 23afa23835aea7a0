//! Movie entity - the single record type of the catalog
//!
//! - **Private fields**: all fields are encapsulated
//! - **Newtypes**: `MovieTitle`, `DirectorName`, `ReleaseYear`, `Rating`
//! - **Valid by construction**: constructors take pre-validated types

use serde::Serialize;

use crate::ids::MovieId;
use crate::value_objects::{DirectorName, MovieTitle, Rating, ReleaseYear};

/// A movie that has not been stored yet (no id assigned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMovie {
    title: MovieTitle,
    director: DirectorName,
    year: ReleaseYear,
    rating: Option<Rating>,
}

impl NewMovie {
    pub fn new(title: MovieTitle, director: DirectorName, year: ReleaseYear) -> Self {
        Self {
            title,
            director,
            year,
            rating: None,
        }
    }

    /// Set the rating (`None` leaves the movie unrated).
    pub fn with_rating(mut self, rating: Option<Rating>) -> Self {
        self.rating = rating;
        self
    }

    #[inline]
    pub fn title(&self) -> &MovieTitle {
        &self.title
    }

    #[inline]
    pub fn director(&self) -> &DirectorName {
        &self.director
    }

    #[inline]
    pub fn year(&self) -> ReleaseYear {
        self.year
    }

    #[inline]
    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Attach the id the store assigned on insert.
    pub fn into_stored(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            director: self.director,
            year: self.year,
            rating: self.rating,
        }
    }
}

/// A stored movie record.
///
/// # Invariants
///
/// - `id` is assigned by the store and never changes
/// - only `rating` is ever updated after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    id: MovieId,
    title: MovieTitle,
    director: DirectorName,
    year: ReleaseYear,
    rating: Option<Rating>,
}

impl Movie {
    /// Rebuild a movie from its stored parts.
    pub fn from_parts(
        id: MovieId,
        title: MovieTitle,
        director: DirectorName,
        year: ReleaseYear,
        rating: Option<Rating>,
    ) -> Self {
        Self {
            id,
            title,
            director,
            year,
            rating,
        }
    }

    #[inline]
    pub fn id(&self) -> MovieId {
        self.id
    }

    #[inline]
    pub fn title(&self) -> &MovieTitle {
        &self.title
    }

    #[inline]
    pub fn director(&self) -> &DirectorName {
        &self.director
    }

    #[inline]
    pub fn year(&self) -> ReleaseYear {
        self.year
    }

    /// `None` means unrated, which is different from a rating of zero.
    #[inline]
    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Replace the rating, leaving every other field untouched.
    pub fn rate(&mut self, rating: Rating) {
        self.rating = Some(rating);
    }
}
