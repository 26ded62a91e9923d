use crate::features::languages::model::{
    DeleteLanguageBody, InsertLanguageBody, UpdateLanguageBody,
};
use crate::features::response::{mutation_failed, mutation_response, SuccessResponse};
use crate::render::forms::management_forms;
use crate::render::page;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};

type FormReply = (StatusCode, Html<String>);

/// Form-encoded twins of the JSON mutations, answering with a result page.
pub fn manage_router() -> Router<AppState> {
    Router::new()
        .route("/view/manage", get(manage_view_handler))
        .route("/view/insert-language", post(insert_language_form_handler))
        .route("/view/update-language", post(update_language_form_handler))
        .route("/view/delete-language", post(delete_language_form_handler))
        .route("/view/initiate-demotable", post(reset_demo_table_form_handler))
}

async fn manage_view_handler() -> Html<String> {
    Html(page("Manage languages", &management_forms()))
}

async fn insert_language_form_handler(
    State(state): State<AppState>,
    Form(body): Form<InsertLanguageBody>,
) -> FormReply {
    let reply = match body.into_new_language() {
        Some(language) => {
            mutation_response("insert_language", state.repo.insert_language(&language).await)
        }
        None => mutation_failed(),
    };
    result_page("Insert language", reply)
}

async fn update_language_form_handler(
    State(state): State<AppState>,
    Form(body): Form<UpdateLanguageBody>,
) -> FormReply {
    let reply = match body.into_update() {
        Some(update) => {
            mutation_response("update_language", state.repo.update_language(&update).await)
        }
        None => mutation_failed(),
    };
    result_page("Update language", reply)
}

async fn delete_language_form_handler(
    State(state): State<AppState>,
    Form(body): Form<DeleteLanguageBody>,
) -> FormReply {
    let name = body.input_name.unwrap_or_default();
    let reply = mutation_response("delete_language", state.repo.delete_language(&name).await);
    result_page("Delete language", reply)
}

async fn reset_demo_table_form_handler(State(state): State<AppState>) -> FormReply {
    let ok = match state.repo.reset_demo_table().await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(kind = e.kind(), error = %e, "failed to reset DEMOTABLE");
            false
        }
    };
    let status = if ok {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    outcome_page("Reset demo table", status, ok)
}

fn result_page(title: &str, (status, Json(reply)): (StatusCode, Json<SuccessResponse>)) -> FormReply {
    outcome_page(title, status, reply.success)
}

fn outcome_page(title: &str, status: StatusCode, ok: bool) -> FormReply {
    let message = if ok {
        "<p id=\"resultMsg\">Done.</p>"
    } else {
        "<p id=\"resultMsg\">Failed, nothing was changed.</p>"
    };
    let content = format!("{}<p><a href=\"/view/manage\">Back</a></p>", message);
    (status, Html(page(title, &[("Result", content)])))
}
