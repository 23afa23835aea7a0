//! Movie rating.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::fields;

pub const MIN_RATING: u8 = 0;
pub const MAX_RATING: u8 = 5;

/// A rating in `0..=5`.
///
/// Zero is a real rating ("rated zero"). An unrated movie carries
/// `Option::<Rating>::None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if `value` is outside `0..=5`.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(MIN_RATING) || value > i64::from(MAX_RATING) {
            return Err(ValidationError::out_of_range(
                fields::RATING,
                i64::from(MIN_RATING),
                i64::from(MAX_RATING),
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    #[inline]
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Rating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> i64 {
        i64::from(rating.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_five_accepted() {
        assert_eq!(Rating::new(0).unwrap().value(), 0);
        assert_eq!(Rating::new(5).unwrap().value(), 5);
    }

    #[test]
    fn six_rejected() {
        let err = Rating::new(6).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("nota", 0, 5, 6));
    }

    #[test]
    fn negative_rejected() {
        assert!(Rating::new(-1).is_err());
    }

    #[test]
    fn serializes_as_plain_number() {
        let rating = Rating::new(4).unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "4");
        let back: Rating = serde_json::from_str("4").unwrap();
        assert_eq!(back, rating);
    }
}
