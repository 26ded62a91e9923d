use crate::tests::{body_text, get, get_json, post_form, setup_test_state, test_router};
use axum::http::StatusCode;

// the population column is joined in by name, languages without dialects get 0
#[tokio::test]
async fn test_languages_view_enriched_with_population() {
    let app = test_router(setup_test_state().await);
    let response = get(&app, "/view/languages").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<th>Population</th>"));
    assert!(html.contains(
        "<tr><td><a href=\"/language/English\">English</a></td><td>Living</td><td>Indo-European</td><td>42</td></tr>"
    ));
    assert!(html.contains(
        "<tr><td><a href=\"/language/Klingon\">Klingon</a></td><td>Constructed</td><td>-</td><td>0</td></tr>"
    ));
}

#[tokio::test]
async fn test_language_detail_page() {
    let app = test_router(setup_test_state().await);
    let response = get(&app, "/language/English").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<h1>English</h1>"));
    assert!(html.contains("<td>Dana</td><td>British</td>"));
    assert!(html.contains("<td>USA</td><td>2</td>"));
    assert!(html.contains("<td>water</td><td>clear liquid</td>"));
}

#[tokio::test]
async fn test_language_detail_page_decodes_name() {
    let app = test_router(setup_test_state().await);
    let html = body_text(get(&app, "/language/Old%20Norse").await).await;

    assert!(html.contains("<h1>Old Norse</h1>"));
    // unknown language still renders, just with empty tables
    assert!(html.contains("<table id=\"speakertable\"><thead>"));
}

#[tokio::test]
async fn test_phonemes_view_headers_from_metadata() {
    let app = test_router(setup_test_state().await);
    let html = body_text(get(&app, "/view/phonemes?options=manner").await).await;

    assert!(html.contains("<thead><tr><th>IPANUMBER</th><th>MANNER</th></tr></thead>"));
    assert!(html.contains("<tr><td>301</td><td>-</td></tr>"));

    let response = get(&app, "/view/phonemes?options=bogus").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ancient_languages_view() {
    let app = test_router(setup_test_state().await);
    let html = body_text(get(&app, "/view/ancient-languages").await).await;

    assert!(html.contains(
        "<td><a href=\"/language/Mandarin\">Mandarin</a></td><td>3200</td><td>Chinese Characters</td>"
    ));
    assert!(!html.contains("Klingon"));
}

#[tokio::test]
async fn test_language_status_view_links_results_and_echoes_filters() {
    let app = test_router(setup_test_state().await);
    let response = get(
        &app,
        "/view/language-status?name=L%25&statusFilter=Extinct&comparator=%3E%3D&age=1000",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<table id=\"languagestatus\">"));
    assert!(html.contains(
        "<tr><td><a href=\"/language/Latin\">Latin</a></td><td>Extinct</td><td>Latin Alphabet</td><td>2700</td></tr>"
    ));
    assert!(!html.contains("/language/English"));
    // the form keeps what was searched for
    assert!(html.contains("name=\"statusFilter\" value=\"Extinct\""));
    assert!(html.contains("<option value=\"&gt;=\" selected>"));
}

#[tokio::test]
async fn test_language_status_view_rejects_bad_age() {
    let app = test_router(setup_test_state().await);
    let response = get(&app, "/view/language-status?age=old").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_phonemes_view_has_option_form() {
    let app = test_router(setup_test_state().await);
    let html = body_text(get(&app, "/view/phonemes?options=height").await).await;

    assert!(html.contains("<form id=\"phoneme-options-form\" method=\"get\" action=\"/view/phonemes\">"));
    assert!(html.contains("value=\"HEIGHT\" checked"));
    assert!(html.contains("value=\"MANNER\">"));
    // always projected, so never offered
    assert!(!html.contains("value=\"IPANUMBER\""));
    assert!(html.contains("<th>IPANUMBER</th><th>HEIGHT</th>"));
}

#[tokio::test]
async fn test_manage_view_lists_every_form() {
    let app = test_router(setup_test_state().await);
    let html = body_text(get(&app, "/view/manage").await).await;

    for action in [
        "/view/insert-language",
        "/view/update-language",
        "/view/delete-language",
        "/view/initiate-demotable",
    ] {
        assert!(html.contains(&format!("action=\"{action}\"")), "{action}");
    }
}

// form posts run the same mutations as the JSON endpoints
#[tokio::test]
async fn test_form_mutations_apply() {
    let app = test_router(setup_test_state().await);

    let response = post_form(&app, "/view/insert-language", "Name=Gothic&Status=Extinct&FamilyName=").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Done."));

    let response = post_form(&app, "/view/update-language", "oldName=Gothic&newStatus=&newFamily=Indo-European").await;
    assert_eq!(response.status(), StatusCode::OK);

    let (_, json) = get_json(&app, "/languagetable").await;
    assert!(json["data"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!(["Gothic", "Extinct", "Indo-European"])));

    let response = post_form(&app, "/view/delete-language", "inputName=Gothic").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_form(&app, "/view/initiate-demotable", "").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_form_mutation_failures_report_500() {
    let app = test_router(setup_test_state().await);

    let response = post_form(&app, "/view/insert-language", "Name=&Status=Living").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("Failed, nothing was changed."));

    let response = post_form(&app, "/view/delete-language", "inputName=Elvish").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
