pub mod model;

use crate::domain::TabularResult;
use crate::error::ValidationError;
use crate::features::response::{
    data_response, mutation_failed, mutation_response, DataResponse, SuccessResponse,
};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use model::{
    DeleteLanguageBody, InsertLanguageBody, LanguageStatusParams, NameQuery, UpdateLanguageBody,
};

type DataJson = Json<DataResponse<TabularResult>>;
type MutationReply = (StatusCode, Json<SuccessResponse>);

pub fn languages_router() -> Router<AppState> {
    Router::new()
        .route("/languagetable", get(list_languages_handler))
        .route("/populationsum", get(population_sum_handler))
        .route("/ancientlanguages", get(ancient_languages_handler))
        .route("/languagespeakers", get(language_speakers_handler))
        .route("/max-lang-speakers", get(max_speakers_handler))
        .route("/words-all-dialects", get(defined_words_handler))
        .route("/language-status", get(language_status_handler))
        .route("/insert-language", post(insert_language_handler))
        .route("/update-name-language", post(update_language_handler))
        .route("/delete-language", post(delete_language_handler))
}

async fn list_languages_handler(State(state): State<AppState>) -> DataJson {
    data_response("fetch_languages", state.repo.fetch_languages().await)
}

async fn population_sum_handler(State(state): State<AppState>) -> DataJson {
    data_response(
        "fetch_population_sums",
        state.repo.fetch_population_sums().await,
    )
}

async fn ancient_languages_handler(State(state): State<AppState>) -> DataJson {
    data_response(
        "fetch_ancient_languages",
        state.repo.fetch_ancient_languages().await,
    )
}

async fn language_speakers_handler(
    State(state): State<AppState>,
    Query(params): Query<NameQuery>,
) -> DataJson {
    let name = params.name.unwrap_or_default();
    data_response(
        "fetch_language_speakers",
        state.repo.fetch_language_speakers(&name).await,
    )
}

async fn max_speakers_handler(
    State(state): State<AppState>,
    Query(params): Query<NameQuery>,
) -> DataJson {
    let name = params.name.unwrap_or_default();
    data_response(
        "fetch_max_speaker_countries",
        state.repo.fetch_max_speaker_countries(&name).await,
    )
}

async fn defined_words_handler(
    State(state): State<AppState>,
    Query(params): Query<NameQuery>,
) -> DataJson {
    let name = params.name.unwrap_or_default();
    data_response(
        "fetch_words_in_all_dialects",
        state.repo.fetch_words_in_all_dialects(&name).await,
    )
}

async fn language_status_handler(
    State(state): State<AppState>,
    Query(params): Query<LanguageStatusParams>,
) -> Result<DataJson, ValidationError> {
    let filter = params.into_filter(state.config.comparator_policy)?;
    Ok(data_response(
        "fetch_language_status",
        state.repo.fetch_language_status(&filter).await,
    ))
}

async fn insert_language_handler(
    State(state): State<AppState>,
    Json(body): Json<InsertLanguageBody>,
) -> MutationReply {
    let Some(language) = body.into_new_language() else {
        tracing::warn!("insert-language called without a name");
        return mutation_failed();
    };
    tracing::debug!(language = %language, "inserting language");

    mutation_response("insert_language", state.repo.insert_language(&language).await)
}

async fn update_language_handler(
    State(state): State<AppState>,
    Json(body): Json<UpdateLanguageBody>,
) -> MutationReply {
    let Some(update) = body.into_update() else {
        tracing::warn!("update-name-language called without a name");
        return mutation_failed();
    };
    tracing::debug!(language = %update, "updating language");

    mutation_response("update_language", state.repo.update_language(&update).await)
}

async fn delete_language_handler(
    State(state): State<AppState>,
    Json(body): Json<DeleteLanguageBody>,
) -> MutationReply {
    let name = body.input_name.unwrap_or_default();
    mutation_response("delete_language", state.repo.delete_language(&name).await)
}
