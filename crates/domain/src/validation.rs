//! Validation of raw request payloads into typed domain values.
//!
//! Request bodies arrive as loosely-typed JSON. Each raw input struct keeps
//! every field as an optional `serde_json::Value` so that a missing field, a
//! field of the wrong type and an out-of-range value can be told apart and
//! reported with the matching `ValidationError` variant.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::entities::NewMovie;
use crate::error::ValidationError;
use crate::fields;
use crate::value_objects::{
    DirectorName, MovieTitle, Rating, ReleaseYear, MAX_RATING, MIN_RATING, MIN_RELEASE_YEAR,
};

const EXPECTED_TEXT: &str = "um texto";
const EXPECTED_INTEGER: &str = "um número inteiro";

/// 2^63, the first integral `f64` that no longer fits in an `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Raw body of an insert request.
///
/// JSON `null` deserializes to `None`, so an explicit `null` is treated the
/// same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawMovieInput {
    #[serde(rename = "titulo", default)]
    pub title: Option<Value>,
    #[serde(rename = "diretor", default)]
    pub director: Option<Value>,
    #[serde(rename = "ano", default)]
    pub year: Option<Value>,
    #[serde(rename = "nota", default)]
    pub rating: Option<Value>,
}

impl RawMovieInput {
    /// Parse a request body leniently.
    ///
    /// An empty body, malformed JSON or a non-object payload yields an input
    /// with every field absent, which then fails with `MissingField`.
    pub fn from_body(body: &[u8]) -> Self {
        object_or_default(body)
    }

    /// Validate into a movie ready for insertion.
    ///
    /// Checks run in three passes so the reported error is predictable:
    /// required fields present, then JSON types, then ranges and text rules.
    pub fn validate(self, current_year: i32) -> Result<NewMovie, ValidationError> {
        let title = required(&self.title, fields::TITLE)?;
        let director = required(&self.director, fields::DIRECTOR)?;
        let year = required(&self.year, fields::YEAR)?;

        let title = text(title, fields::TITLE)?;
        let director = text(director, fields::DIRECTOR)?;
        let year = strict_integer(year, fields::YEAR)?;
        let rating = self
            .rating
            .as_ref()
            .map(|value| strict_integer(value, fields::RATING))
            .transpose()?;

        let year = year.checked(
            fields::YEAR,
            i64::from(MIN_RELEASE_YEAR),
            i64::from(current_year),
            |value| ReleaseYear::new(value, current_year),
        )?;
        let rating = rating.map(checked_rating).transpose()?;
        let title = MovieTitle::new(title)?;
        let director = DirectorName::new(director)?;

        Ok(NewMovie::new(title, director, year).with_rating(rating))
    }
}

/// Raw body of a rating update request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRatingInput {
    #[serde(rename = "nota", default)]
    pub rating: Option<Value>,
}

impl RawRatingInput {
    /// Parse a request body leniently (see [`RawMovieInput::from_body`]).
    pub fn from_body(body: &[u8]) -> Self {
        object_or_default(body)
    }

    /// Validate the new rating.
    ///
    /// Unlike inserts, a numeric string such as `"4"` is accepted here.
    pub fn validate(self) -> Result<Rating, ValidationError> {
        let value = required(&self.rating, fields::RATING)?;
        checked_rating(lenient_integer(value, fields::RATING)?)
    }
}

/// An integer read from a request. Values too large for `i64` keep their
/// text so the range error can echo them.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Integer {
    Fits(i64),
    Overflow(String),
}

impl Integer {
    fn checked<T>(
        self,
        field: &'static str,
        min: i64,
        max: i64,
        build: impl FnOnce(i64) -> Result<T, ValidationError>,
    ) -> Result<T, ValidationError> {
        match self {
            Self::Fits(value) => build(value),
            Self::Overflow(raw) => Err(ValidationError::out_of_range(field, min, max, raw)),
        }
    }
}

fn checked_rating(value: Integer) -> Result<Rating, ValidationError> {
    value.checked(
        fields::RATING,
        i64::from(MIN_RATING),
        i64::from(MAX_RATING),
        Rating::new,
    )
}

/// Only a JSON object is a usable payload; arrays would otherwise fill the
/// struct positionally.
fn object_or_default<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
        _ => T::default(),
    }
}

fn required<'a>(
    value: &'a Option<Value>,
    field: &'static str,
) -> Result<&'a Value, ValidationError> {
    value.as_ref().ok_or(ValidationError::missing(field))
}

fn text<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, ValidationError> {
    value
        .as_str()
        .ok_or(ValidationError::invalid_type(field, EXPECTED_TEXT))
}

/// A JSON integer. Floats (even `4.0`), strings and booleans are rejected.
///
/// Integral numbers beyond `i64` are still integers and come back as
/// `Integer::Overflow`.
fn strict_integer(value: &Value, field: &'static str) -> Result<Integer, ValidationError> {
    let Value::Number(number) = value else {
        return Err(ValidationError::invalid_type(field, EXPECTED_INTEGER));
    };
    if let Some(n) = number.as_i64() {
        return Ok(Integer::Fits(n));
    }

    let beyond_i64 = number.is_u64()
        || number
            .as_f64()
            .is_some_and(|f| f.is_finite() && f.fract() == 0.0 && f.abs() >= I64_LIMIT);
    if beyond_i64 {
        Ok(Integer::Overflow(number.to_string()))
    } else {
        Err(ValidationError::invalid_type(field, EXPECTED_INTEGER))
    }
}

/// A JSON integer, or a string holding one.
fn lenient_integer(value: &Value, field: &'static str) -> Result<Integer, ValidationError> {
    let Value::String(s) = value else {
        return strict_integer(value, field);
    };
    match parse_integer(s, field) {
        Ok(n) => Ok(Integer::Fits(n)),
        Err(_) if is_integer_text(s.trim()) => Ok(Integer::Overflow(s.trim().to_string())),
        Err(e) => Err(e),
    }
}

fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a query-string or text value as an integer.
pub fn parse_integer(value: &str, field: &'static str) -> Result<i64, ValidationError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_type(field, EXPECTED_INTEGER))
}
