//! Validated text newtypes for movie records
//!
//! These newtypes ensure that text fields are valid by construction:
//! - Non-empty
//! - Within length limits (counted in characters, not bytes)
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::fields;

/// Maximum length for title and director fields
pub const MAX_TEXT_LENGTH: usize = 100;

/// Case-fold text for case-insensitive comparisons.
///
/// Uses full Unicode lower-casing so that "AÇÃO" and "ação" compare equal.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

fn validated_text(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().count() > MAX_TEXT_LENGTH {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// MovieTitle
// ============================================================================

/// A validated movie title (non-empty, <=100 chars, trimmed)
///
/// Equality is case-sensitive, matching the storage uniqueness rule. Use
/// [`MovieTitle::folded`] for case-insensitive lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MovieTitle(String);

impl MovieTitle {
    /// Create a new validated title.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` if the title is blank and
    /// `ValidationError::TooLong` if it exceeds 100 characters after trimming.
    pub fn new(title: impl AsRef<str>) -> Result<Self, ValidationError> {
        validated_text(title.as_ref(), fields::TITLE).map(Self)
    }

    /// Returns the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the case-folded title used for lookups.
    pub fn folded(&self) -> String {
        fold_case(&self.0)
    }
}

impl fmt::Display for MovieTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MovieTitle {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<MovieTitle> for String {
    fn from(title: MovieTitle) -> String {
        title.0
    }
}

// ============================================================================
// DirectorName
// ============================================================================

/// A validated director name (non-empty, <=100 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DirectorName(String);

impl DirectorName {
    /// Create a new validated director name.
    ///
    /// # Errors
    ///
    /// Same rules as [`MovieTitle::new`], reported against `diretor`.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        validated_text(name.as_ref(), fields::DIRECTOR).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn folded(&self) -> String {
        fold_case(&self.0)
    }
}

impl fmt::Display for DirectorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for DirectorName {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<DirectorName> for String {
    fn from(name: DirectorName) -> String {
        name.0
    }
}
