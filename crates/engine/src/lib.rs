//! Filmoteca Engine library.
//!
//! This crate contains all server-side code for the movie catalog service.
//!
//! ## Structure
//!
//! - `use_cases/` - Catalog operations orchestrating validation and storage
//! - `infrastructure/` - Port traits and their SQLite/clock implementations
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

/// End-to-end tests driving the router against a real SQLite file.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
