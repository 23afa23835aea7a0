//! Validation errors for the domain layer
//!
//! Every rejection of client input is one of these variants. Messages are
//! client-facing (they end up in the `erro` field of an HTTP response), so
//! they use the wire field names (`titulo`, `diretor`, `ano`, `nota`).

use thiserror::Error;

/// Why a raw request was rejected before reaching the store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent (or `null`)
    #[error("Campo \"{field}\" é obrigatório")]
    MissingField { field: &'static str },

    /// A field was present but had the wrong JSON type or did not parse
    #[error("Campo \"{field}\" deve ser {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// A numeric field was outside its allowed bounds
    #[error("Campo \"{field}\" deve estar entre {min} e {max} (recebido {value})")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        /// The value as the client sent it; it may not fit in an `i64`.
        value: String,
    },

    /// A search was requested without any filter
    #[error("Informe ao menos um parâmetro: titulo, diretor, ano ou nota.")]
    NoFilters,

    /// A text field was blank after trimming
    #[error("Campo \"{field}\" não pode ser vazio")]
    Empty { field: &'static str },

    /// A text field exceeded its maximum length
    #[error("Campo \"{field}\" excede o limite de {max} caracteres")]
    TooLong { field: &'static str, max: usize },
}

impl ValidationError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn invalid_type(field: &'static str, expected: &'static str) -> Self {
        Self::InvalidType { field, expected }
    }

    pub fn out_of_range(field: &'static str, min: i64, max: i64, value: impl ToString) -> Self {
        Self::OutOfRange {
            field,
            min,
            max,
            value: value.to_string(),
        }
    }

    /// The wire name of the offending field, if the error concerns one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field }
            | Self::InvalidType { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::Empty { field }
            | Self::TooLong { field, .. } => Some(field),
            Self::NoFilters => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_wire_field() {
        let err = ValidationError::missing("titulo");
        assert_eq!(err.to_string(), "Campo \"titulo\" é obrigatório");

        let err = ValidationError::out_of_range("nota", 0, 5, 6);
        assert!(err.to_string().contains("\"nota\""));
        assert!(err.to_string().contains("entre 0 e 5"));
    }

    #[test]
    fn no_filters_has_no_field() {
        assert_eq!(ValidationError::NoFilters.field(), None);
        assert_eq!(
            ValidationError::invalid_type("ano", "um número inteiro").field(),
            Some("ano")
        );
    }
}
