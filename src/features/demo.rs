use crate::features::response::{mutation_failed, success, SuccessResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

pub fn demo_router() -> Router<AppState> {
    Router::new().route("/initiate-demotable", post(initiate_demo_table_handler))
}

// dropping and recreating is idempotent, so repeated resets are harmless
async fn initiate_demo_table_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<SuccessResponse>) {
    match state.repo.reset_demo_table().await {
        Ok(()) => (StatusCode::OK, success(true)),
        Err(e) => {
            tracing::error!(kind = e.kind(), error = %e, "failed to reset DEMOTABLE");
            mutation_failed()
        }
    }
}
