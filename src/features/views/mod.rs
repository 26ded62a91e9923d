mod manage;

use crate::error::ValidationError;
use crate::features::languages::model::LanguageStatusParams;
use crate::features::phonemes::selected_options;
use crate::features::response::rows_or_empty;
use crate::query::PhonemeProjection;
use crate::render::forms::{language_status_form, phoneme_options_form, StatusFormValues};
use crate::render::{page, HtmlTable};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde_json::Value;

/// Column the population sum lands in on the language overview.
const POPULATION_COLUMN: usize = 3;

pub fn views_router() -> Router<AppState> {
    Router::new()
        .route("/language/{name}", get(language_detail_handler))
        .route("/view/languages", get(languages_view_handler))
        .route("/view/ancient-languages", get(ancient_languages_view_handler))
        .route("/view/phonemes", get(phonemes_view_handler))
        .route("/view/language-status", get(language_status_view_handler))
        .merge(manage::manage_router())
}

// base table first, then the population sums joined in by language name
async fn languages_view_handler(State(state): State<AppState>) -> Html<String> {
    let languages = rows_or_empty("fetch_languages", state.repo.fetch_languages().await);
    let sums = rows_or_empty(
        "fetch_population_sums",
        state.repo.fetch_population_sums().await,
    );

    let mut table = HtmlTable::from_result(&languages)
        .with_id("languagetable")
        .with_headers(&["Name", "Status", "Family", "Population"])
        .link_first_column();
    table.enrich(&sums, POPULATION_COLUMN, Value::from(0));

    Html(page("Languages", &[("All languages", table.render())]))
}

async fn ancient_languages_view_handler(State(state): State<AppState>) -> Html<String> {
    let ancient = rows_or_empty(
        "fetch_ancient_languages",
        state.repo.fetch_ancient_languages().await,
    );

    let table = HtmlTable::from_result(&ancient)
        .with_id("WStable")
        .with_headers(&["Language", "Age", "Writing system"])
        .link_first_column();

    Html(page(
        "Ancient languages",
        &[("Oldest writing system over 1000 years", table.render())],
    ))
}

async fn phonemes_view_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, ValidationError> {
    let projection = PhonemeProjection::from_options(selected_options(&pairs))?;
    let phonemes = rows_or_empty(
        "fetch_phoneme_options",
        state.repo.fetch_phoneme_options(&projection).await,
    );

    let table = HtmlTable::from_result(&phonemes).with_id("phonemeOptions");
    Ok(Html(page(
        "Phonemes",
        &[
            ("Columns", phoneme_options_form(projection.columns())),
            ("Inventory", table.render()),
        ],
    )))
}

// the form echoes the submitted values back above the results
async fn language_status_view_handler(
    State(state): State<AppState>,
    Query(params): Query<LanguageStatusParams>,
) -> Result<Html<String>, ValidationError> {
    let form = language_status_form(&StatusFormValues {
        name: params.name.as_deref().unwrap_or_default(),
        status: params.status_filter.as_deref().unwrap_or_default(),
        comparator: params.comparator.as_deref().unwrap_or_default(),
        age: params.age.as_deref().unwrap_or_default(),
    });

    let filter = params.into_filter(state.config.comparator_policy)?;
    let statuses = rows_or_empty(
        "fetch_language_status",
        state.repo.fetch_language_status(&filter).await,
    );

    let table = HtmlTable::from_result(&statuses)
        .with_id("languagestatus")
        .with_headers(&["Language", "Status", "Writing system", "Age"])
        .link_first_column();

    Ok(Html(page(
        "Language status",
        &[("Search", form), ("Results", table.render())],
    )))
}

async fn language_detail_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Html<String> {
    let speakers = rows_or_empty(
        "fetch_language_speakers",
        state.repo.fetch_language_speakers(&name).await,
    );
    let countries = rows_or_empty(
        "fetch_max_speaker_countries",
        state.repo.fetch_max_speaker_countries(&name).await,
    );
    let words = rows_or_empty(
        "fetch_words_in_all_dialects",
        state.repo.fetch_words_in_all_dialects(&name).await,
    );

    let sections = [
        (
            "Speakers",
            HtmlTable::from_result(&speakers)
                .with_id("speakertable")
                .with_headers(&["Speaker", "Dialect"])
                .render(),
        ),
        (
            "Countries with the most speakers",
            HtmlTable::from_result(&countries)
                .with_id("maxspeakertable")
                .with_headers(&["Country", "Speakers"])
                .render(),
        ),
        (
            "Words defined in every dialect",
            HtmlTable::from_result(&words)
                .with_id("definedWordTable")
                .with_headers(&["Word", "Meaning"])
                .render(),
        ),
    ];

    Html(page(&name, &sections))
}
