//! Server-side HTML rendering of tabular results.

pub mod forms;

use crate::domain::TabularResult;
use serde_json::Value;
use std::collections::HashMap;

pub const NULL_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HtmlTable {
    id: Option<String>,
    headers: Option<Vec<String>>,
    rows: Vec<Vec<Value>>,
    link_first_column: bool,
}

impl HtmlTable {
    /// Headers come from the result's column metadata when it has any.
    pub fn from_result(result: &TabularResult) -> Self {
        Self {
            id: None,
            headers: result
                .columns
                .as_ref()
                .map(|cols| cols.iter().map(|c| c.name.clone()).collect()),
            rows: result.rows.clone(),
            link_first_column: false,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_headers(mut self, headers: &[&str]) -> Self {
        self.headers = Some(headers.iter().map(|h| h.to_string()).collect());
        self
    }

    /// Render each first cell as a link to the language detail page.
    pub fn link_first_column(mut self) -> Self {
        self.link_first_column = true;
        self
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Joins a second dataset into `column` by matching each row's first cell
    /// against the dataset's first column; the dataset's second column is the
    /// value. Short rows are padded, existing cells overwritten, and rows
    /// without a match (or with a null match) get `default`. Null keys never
    /// match, on either side.
    pub fn enrich(&mut self, dataset: &TabularResult, column: usize, default: Value) {
        let lookup: HashMap<String, &Value> = dataset
            .rows
            .iter()
            .filter_map(|row| match (row.first(), row.get(1)) {
                (Some(key), Some(val)) if !key.is_null() => Some((cell_text(key), val)),
                _ => None,
            })
            .collect();

        for row in &mut self.rows {
            let matched = row
                .first()
                .filter(|key| !key.is_null())
                .and_then(|key| lookup.get(&cell_text(key)));
            let value = match matched {
                Some(val) if !val.is_null() => (*val).clone(),
                _ => default.clone(),
            };

            if row.len() <= column {
                row.resize(column, Value::Null);
                row.push(value);
            } else {
                row[column] = value;
            }
        }
    }

    pub fn render(&self) -> String {
        let mut html = match &self.id {
            Some(id) => format!("<table id=\"{}\">", escape_html(id)),
            None => String::from("<table>"),
        };

        if let Some(headers) = &self.headers {
            html.push_str("<thead><tr>");
            for header in headers {
                html.push_str(&format!("<th>{}</th>", escape_html(header)));
            }
            html.push_str("</tr></thead>");
        }

        html.push_str("<tbody>");
        for row in &self.rows {
            html.push_str("<tr>");
            for (index, cell) in row.iter().enumerate() {
                let text = cell_text(cell);
                if index == 0 && self.link_first_column && !cell.is_null() {
                    html.push_str(&format!(
                        "<td><a href=\"{}\">{}</a></td>",
                        escape_html(&language_href(&text)),
                        escape_html(&text)
                    ));
                } else {
                    html.push_str(&format!("<td>{}</td>", escape_html(&text)));
                }
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");

        html
    }
}

pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => NULL_PLACEHOLDER.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn language_href(name: &str) -> String {
    format!("/language/{}", urlencoding::encode(name))
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Wraps rendered sections in a minimal standalone document.
pub fn page(title: &str, sections: &[(&str, String)]) -> String {
    let mut body = format!("<h1>{}</h1>", escape_html(title));
    for (heading, content) in sections {
        body.push_str(&format!(
            "<section><h2>{}</h2>{}</section>",
            escape_html(heading),
            content
        ));
    }

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title></head><body>{}</body></html>",
        escape_html(title),
        body
    )
}
