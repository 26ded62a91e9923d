use crate::domain::TabularResult;
use crate::error::{DbError, ValidationError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct DataResponse<T> {
    pub data: T,
}

#[derive(Serialize, Debug)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Read failures are logged and answered with an empty result, so clients see
/// the same shape whether nothing matched or the database failed.
pub fn rows_or_empty(operation: &str, result: Result<TabularResult, DbError>) -> TabularResult {
    match result {
        Ok(table) => table,
        Err(e) => {
            tracing::error!(
                operation,
                kind = e.kind(),
                error = %e,
                "read failed, responding with no rows"
            );
            TabularResult::default()
        }
    }
}

pub fn data_response(
    operation: &str,
    result: Result<TabularResult, DbError>,
) -> Json<DataResponse<TabularResult>> {
    Json(DataResponse {
        data: rows_or_empty(operation, result),
    })
}

/// `{success: true}` when at least one row was affected, otherwise
/// `{success: false}` with a 500.
pub fn mutation_response(
    operation: &str,
    result: Result<u64, DbError>,
) -> (StatusCode, Json<SuccessResponse>) {
    match result {
        Ok(affected) if affected > 0 => {
            tracing::info!(operation, affected, "mutation applied");
            (StatusCode::OK, success(true))
        }
        Ok(_) => {
            tracing::info!(operation, "mutation matched no rows");
            mutation_failed()
        }
        Err(e) => {
            tracing::error!(operation, kind = e.kind(), error = %e, "mutation failed");
            mutation_failed()
        }
    }
}

pub fn mutation_failed() -> (StatusCode, Json<SuccessResponse>) {
    (StatusCode::INTERNAL_SERVER_ERROR, success(false))
}

pub fn success(success: bool) -> Json<SuccessResponse> {
    Json(SuccessResponse {
        success,
        error: None,
    })
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "rejected request");
        (
            StatusCode::BAD_REQUEST,
            Json(SuccessResponse {
                success: false,
                error: Some(self.to_string()),
            }),
        )
            .into_response()
    }
}
