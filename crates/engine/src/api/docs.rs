//! Swagger 2.0 description of the HTTP API.

use axum::Json;
use serde_json::{json, Value};

pub async fn api_spec() -> Json<Value> {
    Json(document())
}

fn movie_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "titulo": { "type": "string" },
            "diretor": { "type": "string" },
            "ano": { "type": "integer" },
            "nota": { "type": "integer", "x-nullable": true }
        }
    })
}

fn movie_list_schema() -> Value {
    json!({ "type": "array", "items": movie_schema() })
}

fn title_path_parameter() -> Value {
    json!({ "name": "titulo", "in": "path", "type": "string", "required": true })
}

pub fn document() -> Value {
    json!({
        "swagger": "2.0",
        "info": {
            "title": "APIs Filmes",
            "description": "API para gerenciamento de um acervo de filmes",
            "version": env!("CARGO_PKG_VERSION")
        },
        "consumes": ["application/json"],
        "produces": ["application/json"],
        "paths": {
            "/filmes": { "get": list_operation() },
            "/filme": { "post": add_operation(), "get": search_operation() },
            "/filme/{titulo}": { "delete": remove_operation(), "patch": rate_operation() }
        }
    })
}

fn list_operation() -> Value {
    json!({
        "tags": ["Filmes"],
        "operationId": "obter_filmes",
        "summary": "Retorna a lista de filmes",
        "responses": {
            "200": { "description": "Lista de filmes disponível", "schema": movie_list_schema() }
        }
    })
}

fn add_operation() -> Value {
    let body = json!({
        "in": "body",
        "name": "body",
        "required": true,
        "schema": {
            "required": ["titulo", "diretor", "ano"],
            "properties": {
                "titulo": { "type": "string", "example": "Hereditary" },
                "diretor": { "type": "string", "example": "Ari Aster" },
                "ano": { "type": "integer", "example": 2018 },
                "nota": { "type": "integer", "example": 5 }
            }
        }
    });
    json!({
        "tags": ["Filmes"],
        "operationId": "adicionar_filme",
        "summary": "Adicionar filme",
        "parameters": [body],
        "responses": {
            "201": { "description": "Filme adicionado com sucesso" },
            "400": { "description": "Dados inválidos" },
            "409": { "description": "Filme já cadastrado" }
        }
    })
}

fn search_operation() -> Value {
    let parameters: Vec<Value> = [
        ("titulo", "string"),
        ("diretor", "string"),
        ("ano", "integer"),
        ("nota", "integer"),
    ]
    .into_iter()
    .map(|(name, kind)| json!({ "name": name, "in": "query", "type": kind, "required": false }))
    .collect();

    json!({
        "tags": ["Filmes"],
        "operationId": "obter_filme",
        "summary": "Retorna filmes pelo nome, diretor, ano ou nota",
        "parameters": parameters,
        "responses": {
            "200": { "description": "Lista de filmes encontrados", "schema": movie_list_schema() },
            "400": { "description": "Nenhum parâmetro informado ou parâmetro inválido" }
        }
    })
}

fn remove_operation() -> Value {
    json!({
        "tags": ["Filmes"],
        "operationId": "deletar_filme",
        "summary": "Deletar filme pelo título (corresponde parcialmente, insensível a maiúsculas)",
        "parameters": [title_path_parameter()],
        "responses": {
            "200": { "description": "Filme deletado com sucesso" },
            "404": { "description": "Filme não encontrado" }
        }
    })
}

fn rate_operation() -> Value {
    let body = json!({
        "in": "body",
        "name": "body",
        "required": true,
        "schema": {
            "type": "object",
            "required": ["nota"],
            "properties": {
                "nota": { "type": "integer", "minimum": 0, "maximum": 5 }
            }
        }
    });
    json!({
        "tags": ["Filmes"],
        "operationId": "atualizar_nota_filme",
        "summary": "Atualizar a nota do filme pelo título exato (insensível a maiúsculas)",
        "parameters": [title_path_parameter(), body],
        "responses": {
            "200": { "description": "Nota atualizada com sucesso" },
            "400": { "description": "Nota inválida" },
            "404": { "description": "Filme não encontrado" }
        }
    })
}
