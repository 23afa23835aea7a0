//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, MovieRepo};
use crate::use_cases::CatalogUseCases;

/// Main application state.
///
/// Holds the use cases built on the injected ports.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub catalog: CatalogUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(movie_repo: Arc<dyn MovieRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            use_cases: UseCases {
                catalog: CatalogUseCases::new(movie_repo, clock),
            },
        }
    }
}
