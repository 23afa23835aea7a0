//! Release year of a movie.

use serde::Serialize;
use std::fmt;

use crate::error::ValidationError;
use crate::fields;

/// Earliest release year accepted on write.
pub const MIN_RELEASE_YEAR: i32 = 1800;

/// A release year validated against `[1800, current_year]` at write time.
///
/// The upper bound moves with the calendar, so the check needs the current
/// year from the caller's clock. Years read back from storage were validated
/// when written and are trusted as-is. There is no `Deserialize`: the only
/// ways in are [`ReleaseYear::new`] and [`ReleaseYear::from_storage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ReleaseYear(i32);

impl ReleaseYear {
    /// Validate `value` as a release year.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if `value` is before 1800 or
    /// after `current_year`.
    pub fn new(value: i64, current_year: i32) -> Result<Self, ValidationError> {
        if value < i64::from(MIN_RELEASE_YEAR) || value > i64::from(current_year) {
            return Err(ValidationError::out_of_range(
                fields::YEAR,
                i64::from(MIN_RELEASE_YEAR),
                i64::from(current_year),
                value,
            ));
        }
        // Range check above guarantees the value fits.
        Ok(Self(value as i32))
    }

    /// Rebuild a year that was validated before it was persisted.
    pub fn from_storage(value: i32) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
