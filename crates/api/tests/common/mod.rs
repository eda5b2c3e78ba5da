#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use clinic_api::auth::jwt::JwtConfig;
use clinic_api::config::ServerConfig;
use clinic_api::router::build_app_router;
use clinic_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and authentication off.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: String::new(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        jwt: None,
    }
}

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with_config(pool, test_config())
}

/// Build the router with bearer authentication required.
pub fn build_test_app_with_auth(pool: PgPool, secret: &str) -> Router {
    let config = ServerConfig {
        jwt: Some(JwtConfig {
            secret: secret.to_string(),
        }),
        ..test_config()
    };
    build_app_with_config(pool, config)
}

fn build_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn get_with_bearer(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::get(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn jane_doe() -> serde_json::Value {
    serde_json::json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "date_of_birth": "1990-01-01",
        "gender": "female",
        "contact_number": "555-0100",
        "address": "1 Elm St"
    })
}

/// Create a client via the API and return its id.
pub async fn create_client(pool: &PgPool, body: serde_json::Value) -> String {
    let response = post_json(build_test_app(pool.clone()), "/api/client", body).await;
    assert_eq!(response.status(), 200);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

/// Create an active program via the API and return its id.
pub async fn create_program(pool: &PgPool, name: &str) -> String {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/program",
        serde_json::json!({"name": name, "description": format!("{name} program"), "status": "active"}),
    )
    .await;
    assert_eq!(response.status(), 200);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

pub async fn enroll(pool: &PgPool, client_id: &str, program_id: &str) -> Response<Body> {
    post_json(
        build_test_app(pool.clone()),
        "/api/enrollment",
        serde_json::json!({"client_id": client_id, "program_id": program_id}),
    )
    .await
}
