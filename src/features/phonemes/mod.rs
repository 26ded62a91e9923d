use crate::domain::TabularResult;
use crate::error::ValidationError;
use crate::features::response::{data_response, DataResponse};
use crate::query::PhonemeProjection;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

pub fn phonemes_router() -> Router<AppState> {
    Router::new().route("/phoneme-options", get(phoneme_options_handler))
}

/// Collects every `options` value from the query string; repeated keys and
/// comma separated values are both accepted.
pub fn selected_options(pairs: &[(String, String)]) -> Vec<&str> {
    pairs
        .iter()
        .filter(|(key, _)| key == "options")
        .map(|(_, val)| val.as_str())
        .collect()
}

async fn phoneme_options_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<DataResponse<TabularResult>>, ValidationError> {
    let projection = PhonemeProjection::from_options(selected_options(&pairs))?;
    Ok(data_response(
        "fetch_phoneme_options",
        state.repo.fetch_phoneme_options(&projection).await,
    ))
}
