use crate::AppState;
use axum::{extract::State, routing::get, Router};

pub fn health_router() -> Router<AppState> {
    Router::new().route("/check-db-connection", get(check_db_connection_handler))
}

async fn check_db_connection_handler(State(state): State<AppState>) -> &'static str {
    match state.repo.ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::error!(kind = e.kind(), error = %e, "database connectivity check failed");
            "unable to connect"
        }
    }
}
