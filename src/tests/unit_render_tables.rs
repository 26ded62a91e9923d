use crate::domain::TabularResult;
use crate::render::{cell_text, escape_html, language_href, HtmlTable, NULL_PLACEHOLDER};
use serde_json::{json, Value};

fn languages() -> TabularResult {
    TabularResult::from_rows(vec![
        vec![json!("English"), json!("Living"), json!("Indo-European")],
        vec![json!("Klingon"), json!("Constructed"), Value::Null],
    ])
}

// a matched key takes the dataset's value, a missing key takes the default
#[test]
fn test_enrich_appends_matched_and_default_values() {
    let sums = TabularResult::from_rows(vec![vec![json!("English"), json!(42)]]);

    let mut table = HtmlTable::from_result(&languages());
    table.enrich(&sums, 3, json!(0));

    assert_eq!(table.rows()[0][3], json!(42));
    assert_eq!(table.rows()[1][3], json!(0));
    assert_eq!(table.rows()[0].len(), 4);
}

#[test]
fn test_enrich_overwrites_existing_column() {
    let mut table = HtmlTable::from_result(&languages());
    let first = TabularResult::from_rows(vec![vec![json!("English"), json!(1)]]);
    let second = TabularResult::from_rows(vec![vec![json!("English"), json!(42)]]);

    table.enrich(&first, 3, json!(0));
    table.enrich(&second, 3, json!(0));

    assert_eq!(table.rows()[0], vec![
        json!("English"),
        json!("Living"),
        json!("Indo-European"),
        json!(42)
    ]);
}

// short rows are padded up to the target column
#[test]
fn test_enrich_pads_short_rows() {
    let base = TabularResult::from_rows(vec![vec![json!("Latin")]]);
    let sums = TabularResult::from_rows(vec![vec![json!("Latin"), Value::Null]]);

    let mut table = HtmlTable::from_result(&base);
    table.enrich(&sums, 2, json!(0));

    // a null match falls back to the default too
    assert_eq!(table.rows()[0], vec![json!("Latin"), Value::Null, json!(0)]);
}

// a null first cell must not pick up a dataset row keyed "-" or null
#[test]
fn test_enrich_never_matches_null_keys() {
    let base = TabularResult::from_rows(vec![vec![Value::Null, json!("Living")]]);
    let sums = TabularResult::from_rows(vec![
        vec![json!(NULL_PLACEHOLDER), json!(7)],
        vec![Value::Null, json!(9)],
    ]);

    let mut table = HtmlTable::from_result(&base);
    table.enrich(&sums, 2, json!(0));

    assert_eq!(table.rows()[0][2], json!(0));
}

// a real "-" key still joins with a "-" cell
#[test]
fn test_enrich_matches_literal_placeholder_text() {
    let base = TabularResult::from_rows(vec![vec![json!(NULL_PLACEHOLDER)]]);
    let sums = TabularResult::from_rows(vec![
        vec![Value::Null, json!(9)],
        vec![json!(NULL_PLACEHOLDER), json!(7)],
    ]);

    let mut table = HtmlTable::from_result(&base);
    table.enrich(&sums, 1, json!(0));

    assert_eq!(table.rows()[0][1], json!(7));
}

#[test]
fn test_render_without_metadata_has_no_header() {
    let html = HtmlTable::from_result(&languages()).render();

    assert!(!html.contains("<thead>"));
    assert!(html.contains("<td>English</td><td>Living</td><td>Indo-European</td>"));
    assert!(html.contains(&format!("<td>{}</td>", NULL_PLACEHOLDER)));
}

#[test]
fn test_render_headers_from_metadata() {
    let result = TabularResult::from_rows(vec![vec![json!(101), Value::Null, json!(0)]])
        .with_column_names(vec!["IPANUMBER".into(), "HEIGHT".into(), "VOICED".into()]);

    let html = HtmlTable::from_result(&result).with_id("phonemes").render();

    assert!(html.starts_with("<table id=\"phonemes\"><thead><tr><th>IPANUMBER</th><th>HEIGHT</th><th>VOICED</th></tr></thead>"));
    assert!(html.contains("<tr><td>101</td><td>-</td><td>0</td></tr>"));
}

#[test]
fn test_render_links_first_column() {
    let result = TabularResult::from_rows(vec![vec![json!("Old English"), json!("Extinct")]]);
    let html = HtmlTable::from_result(&result).link_first_column().render();

    assert!(html.contains("<td><a href=\"/language/Old%20English\">Old English</a></td>"));
    assert!(html.contains("<td>Extinct</td>"));
}

#[test]
fn test_render_escapes_cell_text() {
    let result = TabularResult::from_rows(vec![vec![json!("<script>alert('x')</script>")]]);
    let html = HtmlTable::from_result(&result).render();

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
}

#[test]
fn test_cell_text_and_helpers() {
    assert_eq!(cell_text(&Value::Null), "-");
    assert_eq!(cell_text(&json!("text")), "text");
    assert_eq!(cell_text(&json!(2.5)), "2.5");
    assert_eq!(escape_html("a & b"), "a &amp; b");
    assert_eq!(language_href("Ge'ez"), "/language/Ge%27ez");
}

#[test]
fn test_tabular_result_serialization() {
    let plain = TabularResult::from_rows(vec![vec![json!("English"), json!(42)]]);
    assert_eq!(serde_json::to_value(&plain).unwrap(), json!([["English", 42]]));

    let described = plain.with_column_names(vec!["NAME".into(), "TOTAL".into()]);
    assert_eq!(
        serde_json::to_value(&described).unwrap(),
        json!({
            "metaData": [{"name": "NAME"}, {"name": "TOTAL"}],
            "rows": [["English", 42]]
        })
    );
}
