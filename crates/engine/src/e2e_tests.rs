//! Router-level tests: real HTTP requests against a SQLite file in a temp dir.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::api;
use crate::app::App;
use crate::config::CorsOrigins;
use crate::infrastructure::{clock::FixedClock, sqlite::SqliteMovieRepo};

const CURRENT_YEAR: i32 = 2026;

struct TestServer {
    router: Router,
    _temp_dir: tempfile::TempDir,
}

impl TestServer {
    async fn start() -> Self {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let repo = SqliteMovieRepo::open(&temp_dir.path().join("filmes.db"))
            .await
            .expect("open repo");
        let app = Arc::new(App::new(
            Arc::new(repo),
            Arc::new(FixedClock::in_year(CURRENT_YEAR)),
        ));

        Self {
            router: api::router(app, &CorsOrigins::Any),
            _temp_dir: temp_dir,
        }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request.body(body).expect("request"))
            .await
            .expect("response");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn add(&self, movie: Value) -> (StatusCode, Value) {
        self.send(Method::POST, "/filme", Some(movie)).await
    }

    async fn list(&self) -> Vec<Value> {
        let (status, body) = self.send(Method::GET, "/filmes", None).await;
        assert_eq!(status, StatusCode::OK);
        body.as_array().expect("array").clone()
    }
}

fn titles(movies: &[Value]) -> Vec<&str> {
    movies
        .iter()
        .map(|m| m["titulo"].as_str().expect("titulo"))
        .collect()
}

#[tokio::test]
async fn empty_catalog_lists_nothing() {
    let server = TestServer::start().await;
    assert!(server.list().await.is_empty());
}

#[tokio::test]
async fn insert_list_delete_round_trip() {
    let server = TestServer::start().await;

    let movie = json!({"titulo": "Hereditary", "diretor": "Ari Aster", "ano": 2018, "nota": 5});
    let (status, body) = server.add(movie.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"mensagem": "Filme adicionado com sucesso!"}));

    assert_eq!(server.list().await, vec![movie]);

    let (status, body) = server.send(Method::DELETE, "/filme/hereditary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"mensagem": "Hereditary foi removido com sucesso."})
    );

    assert!(server.list().await.is_empty());
}

#[tokio::test]
async fn year_bounds_on_insert() {
    let server = TestServer::start().await;

    let (status, body) = server
        .add(json!({"titulo": "Too Old", "diretor": "X", "ano": 1799}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["erro"].as_str().expect("erro").contains("\"ano\""));

    let (status, _) = server
        .add(json!({"titulo": "This Year", "diretor": "X", "ano": CURRENT_YEAR}))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = server
        .add(json!({"titulo": "Next Year", "diretor": "X", "ano": CURRENT_YEAR + 1}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let huge: Value =
        serde_json::from_str(r#"{"titulo": "Huge", "diretor": "X", "ano": 100000000000000000000}"#)
            .expect("json");
    let (status, body) = server.add(huge).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["erro"]
        .as_str()
        .expect("erro")
        .contains("entre 1800 e 2026"));
}

#[tokio::test]
async fn rating_bounds_on_insert() {
    let server = TestServer::start().await;

    let (status, _) = server
        .add(json!({"titulo": "Six", "diretor": "X", "ano": 2000, "nota": 6}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    for (title, rating) in [("Zero", 0), ("Five", 5)] {
        let (status, _) = server
            .add(json!({"titulo": title, "diretor": "X", "ano": 2000, "nota": rating}))
            .await;
        assert_eq!(status, StatusCode::CREATED, "rating {rating} should be accepted");
    }

    let listed = server.list().await;
    assert_eq!(titles(&listed), vec!["Zero", "Five"]);
    assert_eq!(listed[0]["nota"], json!(0));
}

#[tokio::test]
async fn missing_and_mistyped_fields_are_bad_requests() {
    let server = TestServer::start().await;

    let (status, body) = server.add(json!({"diretor": "X", "ano": 2000})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"erro": "Campo \"titulo\" é obrigatório"}));

    let (status, _) = server
        .add(json!({"titulo": "X", "diretor": "Y", "ano": "2000"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // No body at all
    let (status, _) = server.send(Method::POST, "/filme", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(server.list().await.is_empty());
}

#[tokio::test]
async fn duplicate_title_conflicts() {
    let server = TestServer::start().await;

    let (status, _) = server
        .add(json!({"titulo": "Alien", "diretor": "Ridley Scott", "ano": 1979}))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = server
        .add(json!({"titulo": "Alien", "diretor": "Someone Else", "ano": 2020, "nota": 1}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"erro": "Filme já cadastrado!"}));

    let listed = server.list().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["diretor"], json!("Ridley Scott"));
}

#[tokio::test]
async fn search_requires_a_filter() {
    let server = TestServer::start().await;

    let (status, body) = server.send(Method::GET, "/filme", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"erro": "Informe ao menos um parâmetro: titulo, diretor, ano ou nota."})
    );

    let (status, _) = server.send(Method::GET, "/filme?titulo=", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = server.send(Method::GET, "/filme?ano=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_filters() {
    let server = TestServer::start().await;
    for movie in [
        json!({"titulo": "Hereditary", "diretor": "Ari Aster", "ano": 2018, "nota": 5}),
        json!({"titulo": "Midsommar", "diretor": "Ari Aster", "ano": 2019, "nota": 4}),
        json!({"titulo": "Annihilation", "diretor": "Alex Garland", "ano": 2018}),
    ] {
        assert_eq!(server.add(movie).await.0, StatusCode::CREATED);
    }

    let (status, body) = server.send(Method::GET, "/filme?ano=2018", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        titles(body.as_array().expect("array")),
        vec!["Hereditary", "Annihilation"]
    );

    let (_, body) = server
        .send(Method::GET, "/filme?diretor=ARI&nota=4", None)
        .await;
    assert_eq!(titles(body.as_array().expect("array")), vec!["Midsommar"]);

    let (status, body) = server.send(Method::GET, "/filme?titulo=matrix", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn repeated_search_parameter_uses_first_value() {
    let server = TestServer::start().await;
    for movie in [
        json!({"titulo": "Hereditary", "diretor": "Ari Aster", "ano": 2018}),
        json!({"titulo": "Midsommar", "diretor": "Ari Aster", "ano": 2019}),
    ] {
        assert_eq!(server.add(movie).await.0, StatusCode::CREATED);
    }

    let (status, body) = server
        .send(Method::GET, "/filme?ano=2018&ano=2019", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(body.as_array().expect("array")), vec!["Hereditary"]);
}

#[tokio::test]
async fn undecodable_title_is_not_found_with_json_body() {
    let server = TestServer::start().await;
    server
        .add(json!({"titulo": "Alien", "diretor": "Ridley Scott", "ano": 1979}))
        .await;

    let (status, body) = server.send(Method::DELETE, "/filme/%FF", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"erro": "Filme não encontrado"}));

    let (status, body) = server
        .send(Method::PATCH, "/filme/%FF", Some(json!({"nota": 3})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"erro": "Filme não encontrado"}));

    assert_eq!(server.list().await.len(), 1);
}

#[tokio::test]
async fn undecodable_search_value_is_a_json_bad_request() {
    let server = TestServer::start().await;

    let (status, body) = server.send(Method::GET, "/filme?ano=%FF", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["erro"].is_string());
}

#[tokio::test]
async fn delete_uses_partial_case_insensitive_match() {
    let server = TestServer::start().await;
    server
        .add(json!({"titulo": "The Matrix", "diretor": "Wachowskis", "ano": 1999}))
        .await;

    let (status, _) = server.send(Method::DELETE, "/filme/MATRIX", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(server.list().await.is_empty());

    let (status, body) = server.send(Method::DELETE, "/filme/matrix", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"erro": "Filme não encontrado"}));
}

#[tokio::test]
async fn rating_update_uses_exact_case_insensitive_match() {
    let server = TestServer::start().await;
    server
        .add(json!({"titulo": "The Matrix", "diretor": "Wachowskis", "ano": 1999, "nota": 3}))
        .await;

    let (status, body) = server
        .send(Method::PATCH, "/filme/the%20matrix", Some(json!({"nota": 5})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"mensagem": "Nota do filme The Matrix atualizada para 5."})
    );

    let listed = server.list().await;
    assert_eq!(
        listed,
        vec![json!({"titulo": "The Matrix", "diretor": "Wachowskis", "ano": 1999, "nota": 5})]
    );
}

#[tokio::test]
async fn rating_update_does_not_match_substrings() {
    let server = TestServer::start().await;
    server
        .add(json!({"titulo": "The Matrix Reloaded", "diretor": "Wachowskis", "ano": 2003}))
        .await;

    let (status, _) = server
        .send(Method::PATCH, "/filme/matrix", Some(json!({"nota": 4})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert!(server.list().await[0]["nota"].is_null());
}

#[tokio::test]
async fn rating_update_validates_body() {
    let server = TestServer::start().await;
    server
        .add(json!({"titulo": "Alien", "diretor": "Ridley Scott", "ano": 1979}))
        .await;

    for body in [json!({}), json!({"nota": "muito bom"}), json!({"nota": 7})] {
        let (status, _) = server
            .send(Method::PATCH, "/filme/alien", Some(body.clone()))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body} should be rejected");
    }

    // Numeric strings are accepted on update.
    let (status, _) = server
        .send(Method::PATCH, "/filme/alien", Some(json!({"nota": "0"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(server.list().await[0]["nota"], json!(0));
}

#[tokio::test]
async fn health_and_api_spec() {
    let server = TestServer::start().await;

    let response = server
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let (status, body) = server.send(Method::GET, "/apispec_1.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], json!("APIs Filmes"));
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let server = TestServer::start().await;

    let response = server
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/filme")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
