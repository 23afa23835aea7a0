//! Use cases - user story orchestration over the repository ports.

pub mod catalog;

pub use catalog::{CatalogError, CatalogUseCases};
