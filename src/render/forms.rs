//! Plain HTML forms for the filter and mutation views. No scripting: every
//! form submits straight to a server route.

use crate::query::{Comparator, PhonemeColumn};
use crate::render::escape_html;

/// Current values of the language-status search, echoed back into its form.
#[derive(Debug, Clone, Default)]
pub struct StatusFormValues<'a> {
    pub name: &'a str,
    pub status: &'a str,
    pub comparator: &'a str,
    pub age: &'a str,
}

pub fn language_status_form(values: &StatusFormValues) -> String {
    let mut comparators = String::new();
    for comparator in Comparator::ALL {
        let token = comparator.to_string();
        let selected = if token == values.comparator.trim() {
            " selected"
        } else {
            ""
        };
        comparators.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>",
            escape_html(&token),
            selected
        ));
    }

    format!(
        "<form id=\"showlanguagestatus\" method=\"get\" action=\"/view/language-status\">\
         {}{}\
         <label>Writing system age <select name=\"comparator\">{}</select></label>\
         {}\
         <button type=\"submit\">Search</button></form>",
        text_input("Name (LIKE pattern)", "name", values.name),
        text_input("Status", "statusFilter", values.status),
        comparators,
        text_input("Age", "age", values.age),
    )
}

/// One checkbox per optional column; `IPANUMBER` is always projected.
pub fn phoneme_options_form(selected: &[PhonemeColumn]) -> String {
    let mut boxes = String::new();
    for column in PhonemeColumn::ALL
        .into_iter()
        .filter(|c| *c != PhonemeColumn::IpaNumber)
    {
        let checked = if selected.contains(&column) {
            " checked"
        } else {
            ""
        };
        boxes.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"options\" value=\"{0}\"{1}> {0}</label>",
            column, checked
        ));
    }

    format!(
        "<form id=\"phoneme-options-form\" method=\"get\" action=\"/view/phonemes\">\
         {}<button type=\"submit\">Show</button></form>",
        boxes
    )
}

/// Insert, update, delete and reset forms. Field names match the JSON API
/// bodies so the same models decode both.
pub fn management_forms() -> Vec<(&'static str, String)> {
    vec![
        (
            "Insert a language",
            post_form(
                "insertLanguage",
                "/view/insert-language",
                &[
                    text_input("Name", "Name", ""),
                    text_input("Status", "Status", ""),
                    text_input("Family", "FamilyName", ""),
                ],
                "Insert",
            ),
        ),
        (
            "Update a language",
            post_form(
                "updateLanguage",
                "/view/update-language",
                &[
                    text_input("Name", "oldName", ""),
                    text_input("New status", "newStatus", ""),
                    text_input("New family", "newFamily", ""),
                ],
                "Update",
            ),
        ),
        (
            "Delete a language",
            post_form(
                "deleteLanguage",
                "/view/delete-language",
                &[text_input("Name", "inputName", "")],
                "Delete",
            ),
        ),
        (
            "Demo table",
            post_form("resetDemotable", "/view/initiate-demotable", &[], "Reset"),
        ),
    ]
}

fn text_input(label: &str, name: &str, value: &str) -> String {
    format!(
        "<label>{} <input type=\"text\" name=\"{}\" value=\"{}\"></label>",
        escape_html(label),
        escape_html(name),
        escape_html(value)
    )
}

fn post_form(id: &str, action: &str, fields: &[String], submit: &str) -> String {
    format!(
        "<form id=\"{}\" method=\"post\" action=\"{}\">{}<button type=\"submit\">{}</button></form>",
        id,
        action,
        fields.concat(),
        escape_html(submit)
    )
}
