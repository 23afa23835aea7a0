//! Search filters built from query-string parameters.

use serde::Deserialize;

use crate::error::ValidationError;
use crate::fields;
use crate::validation::parse_integer;
use crate::value_objects::fold_case;

/// Raw search parameters (`?titulo=&diretor=&ano=&nota=`).
///
/// Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawSearchQuery {
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "diretor")]
    pub director: Option<String>,
    #[serde(rename = "ano")]
    pub year: Option<String>,
    #[serde(rename = "nota")]
    pub rating: Option<String>,
}

impl RawSearchQuery {
    /// Collect parameters from decoded query-string pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                fields::TITLE => &mut query.title,
                fields::DIRECTOR => &mut query.director,
                fields::YEAR => &mut query.year,
                fields::RATING => &mut query.rating,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }
}

/// A single search condition.
///
/// Text predicates hold case-folded needles; the store compares them with
/// the folded copy of the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    TitleContains(String),
    DirectorContains(String),
    YearEquals(i64),
    RatingEquals(i64),
}

/// A non-empty conjunction of predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    predicates: Vec<Predicate>,
}

impl SearchFilter {
    /// Build a filter from raw query parameters.
    ///
    /// # Errors
    ///
    /// - `InvalidType` if `ano` or `nota` does not parse as an integer
    /// - `NoFilters` if no parameter was supplied
    ///
    /// Year and rating values are not range-checked: an impossible value
    /// simply matches nothing.
    pub fn from_query(query: RawSearchQuery) -> Result<Self, ValidationError> {
        let mut predicates = Vec::new();

        if let Some(title) = present(query.title.as_deref()) {
            predicates.push(Predicate::TitleContains(fold_case(title)));
        }
        if let Some(director) = present(query.director.as_deref()) {
            predicates.push(Predicate::DirectorContains(fold_case(director)));
        }
        if let Some(year) = present(query.year.as_deref()) {
            predicates.push(Predicate::YearEquals(parse_integer(year, fields::YEAR)?));
        }
        if let Some(rating) = present(query.rating.as_deref()) {
            predicates.push(Predicate::RatingEquals(parse_integer(rating, fields::RATING)?));
        }

        Self::new(predicates)
    }

    /// # Errors
    ///
    /// Returns `NoFilters` if `predicates` is empty.
    pub fn new(predicates: Vec<Predicate>) -> Result<Self, ValidationError> {
        if predicates.is_empty() {
            return Err(ValidationError::NoFilters);
        }
        Ok(Self { predicates })
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
