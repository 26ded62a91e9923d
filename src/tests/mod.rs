mod api_views_router;
mod unit_render_tables;

use crate::config::{LinguaConfig, PoolConfig};
use crate::database::sqlite::SqliteRepository;
use crate::database::Database;
use crate::query::ComparatorPolicy;
use crate::AppState;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use sqlx::sqlite::SqlitePoolOptions;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const SEED: &str = include_str!("fixtures/linguistics_seed.sql");

// a fresh, migrated and seeded in-memory database
// a single connection that never expires, since every sqlite::memory: connection is its own database
pub async fn setup_test_db() -> Database {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(Duration::from_secs(5))
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    let db = Database::from_pool(pool);
    db.migrate().await.expect("Failed to run migrations");

    sqlx::raw_sql(SEED)
        .execute(db.pool())
        .await
        .expect("Failed to seed database");

    db
}

pub fn test_config(comparator_policy: ComparatorPolicy) -> LinguaConfig {
    LinguaConfig {
        database_url: "sqlite::memory:".into(),
        pool: PoolConfig::default(),
        bind_addr: "127.0.0.1:0".into(),
        frontend_path: PathBuf::from("./public"),
        comparator_policy,
        shutdown_grace: Duration::from_secs(1),
    }
}

pub async fn setup_test_state() -> AppState {
    setup_test_state_with_policy(ComparatorPolicy::Substitute).await
}

pub async fn setup_test_state_with_policy(policy: ComparatorPolicy) -> AppState {
    let db = setup_test_db().await;
    AppState {
        repo: Arc::new(SqliteRepository::new(db)),
        config: Arc::new(test_config(policy)),
    }
}

pub fn test_router(state: AppState) -> Router {
    crate::features::app_router().with_state(state)
}

pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = get(app, uri).await;
    let status = response.status();
    (status, body_json(response).await)
}
