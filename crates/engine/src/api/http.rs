//! HTTP routes.
//!
//! The wire contract uses Portuguese names: `titulo`, `diretor`, `ano` and
//! `nota` for fields, `mensagem` for success messages and `erro` for client
//! errors.

use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use filmoteca_domain::{Movie, RawMovieInput, RawRatingInput, RawSearchQuery};

use crate::api::docs;
use crate::app::App;
use crate::use_cases::CatalogError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        .route("/apispec_1.json", get(docs::api_spec))
        .route("/filmes", get(list_movies))
        .route("/filme", get(search_movies).post(add_movie))
        .route("/filme/{titulo}", delete(remove_movie).patch(rate_movie))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Wire types
// =============================================================================

/// A movie as returned by list and search. The id is not exposed.
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub titulo: String,
    pub diretor: String,
    pub ano: i32,
    pub nota: Option<u8>,
}

impl From<&Movie> for MovieResponse {
    fn from(movie: &Movie) -> Self {
        Self {
            titulo: movie.title().to_string(),
            diretor: movie.director().to_string(),
            ano: movie.year().value(),
            nota: movie.rating().map(|r| r.value()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensagem: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            mensagem: message.into(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub erro: String,
}

fn to_responses(movies: &[Movie]) -> Vec<MovieResponse> {
    movies.iter().map(MovieResponse::from).collect()
}

// =============================================================================
// Catalog
// =============================================================================

async fn list_movies(State(app): State<Arc<App>>) -> Result<Json<Vec<MovieResponse>>, ApiError> {
    let movies = app.use_cases.catalog.list.execute().await?;
    Ok(Json(to_responses(&movies)))
}

/// The body is read as raw bytes so that an empty or malformed payload is
/// reported as missing fields instead of an extractor rejection.
async fn add_movie(
    State(app): State<Arc<App>>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let input = RawMovieInput::from_body(&body);
    app.use_cases.catalog.add.execute(input).await?;
    Ok((
        StatusCode::CREATED,
        MessageResponse::new("Filme adicionado com sucesso!"),
    ))
}

/// Parameters are taken as raw pairs so that a repeated key keeps its first
/// value instead of failing deserialization.
async fn search_movies(
    State(app): State<Arc<App>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<MovieResponse>>, ApiError> {
    let Query(pairs) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let query = RawSearchQuery::from_pairs(pairs);
    let movies = app.use_cases.catalog.search.execute(query).await?;
    Ok(Json(to_responses(&movies)))
}

async fn remove_movie(
    State(app): State<Arc<App>>,
    titulo: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let titulo = title_from_path(titulo)?;
    let movie = app.use_cases.catalog.remove.execute(&titulo).await?;
    Ok(MessageResponse::new(format!(
        "{} foi removido com sucesso.",
        movie.title()
    )))
}

async fn rate_movie(
    State(app): State<Arc<App>>,
    titulo: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let titulo = title_from_path(titulo)?;
    let input = RawRatingInput::from_body(&body);
    let movie = app.use_cases.catalog.rate.execute(&titulo, input).await?;
    let rating = movie
        .rating()
        .map(|r| r.to_string())
        .unwrap_or_default();
    Ok(MessageResponse::new(format!(
        "Nota do filme {} atualizada para {}.",
        movie.title(),
        rating
    )))
}

/// A title segment that does not decode to UTF-8 cannot name a stored movie.
fn title_from_path(titulo: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    match titulo {
        Ok(Path(titulo)) => Ok(titulo),
        Err(e) => {
            tracing::debug!(error = %e, "Undecodable title in path");
            Err(ApiError::NotFound)
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Conflict,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Filme não encontrado".to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict => (StatusCode::CONFLICT, "Filme já cadastrado!".to_string()),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro interno".to_string())
            }
        };
        (status, Json(ErrorResponse { erro: message })).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Validation(e) => ApiError::BadRequest(e.to_string()),
            CatalogError::NotFound { .. } => ApiError::NotFound,
            CatalogError::Conflict { .. } => ApiError::Conflict,
            CatalogError::Repo(e) => ApiError::Internal(e.to_string()),
        }
    }
}
