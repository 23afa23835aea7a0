//! API layer - HTTP entry points.

pub mod docs;
pub mod http;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app::App;
use crate::config::CorsOrigins;

/// Build the complete router: routes, request tracing and CORS.
pub fn router(app: Arc<App>, cors_origins: &CorsOrigins) -> Router {
    http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_origins))
}

fn build_cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    let CorsOrigins::List(list) = origins else {
        return cors.allow_origin(Any);
    };

    let origins: Vec<HeaderValue> = list
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }
    cors.allow_origin(origins)
}
