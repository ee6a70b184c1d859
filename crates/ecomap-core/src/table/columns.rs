//! Table column list: built-in default, or derived from a JSON-Schema-like
//! document describing the record fields.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// One table column. `key` is the identifier the row builder and the
/// client-side visibility toggles use; `label` is the header text.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub label: String,
}

impl Column {
    fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// The full built-in column set, in display order.
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Project Name"),
        Column::new("description", "Description"),
        Column::new("category", "Category"),
        Column::new("ecosystem", "Ecosystem"),
        Column::new("layer", "Layer"),
        Column::new("audience", "Target Audience"),
        Column::new("website", "Website"),
        Column::new("github", "GitHub"),
        Column::new("documentation", "Documentation"),
        Column::new("twitter", "Twitter"),
        Column::new("discord", "Discord"),
        Column::new("blog", "Blog"),
        Column::new("contact", "Contact"),
        Column::new("playstore", "Play Store"),
        Column::new("appstore", "App Store"),
        Column::new("webstore", "Web Store"),
        Column::new("logo", "Logo"),
        Column::new("readiness", "Readiness"),
        Column::new("github-stars", "GitHub Stars"),
        Column::new("twitter-followers", "Twitter Followers"),
        Column::new("discord-members", "Discord Members"),
        Column::new("treasury", "Treasury Funded"),
        Column::new("audit", "Audited"),
    ]
}

/// Load a JSON-Schema document and derive the column list from its
/// `properties`, preserving declaration order.
///
/// Nested `web.properties` and `metrics.properties` expand into one column
/// per sub-field; a `title` on any property overrides the generated label.
pub fn columns_from_schema(path: &Path) -> Result<Vec<Column>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading schema {}", path.display()))?;
    let schema: Value = serde_json::from_str(&data)
        .with_context(|| format!("parsing schema {}", path.display()))?;

    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .context("schema has no properties object")?;

    let mut columns = Vec::new();
    for (key, prop) in properties {
        match key.as_str() {
            "web" | "metrics" => {
                if let Some(sub) = prop.get("properties").and_then(Value::as_object) {
                    for (sub_key, sub_prop) in sub {
                        let col_key = column_key(key, sub_key);
                        columns.push(Column {
                            label: label_of(sub_prop, &col_key),
                            key: col_key,
                        });
                    }
                }
            }
            _ => {
                let col_key = column_key("", key);
                columns.push(Column {
                    label: label_of(prop, &col_key),
                    key: col_key,
                });
            }
        }
    }
    Ok(columns)
}

/// Map a schema field name to the column key the row builder understands.
fn column_key(parent: &str, key: &str) -> String {
    match (parent, key) {
        ("web", "site") => "website".to_string(),
        ("metrics", "github") => "github-stars".to_string(),
        ("metrics", "twitter") => "twitter-followers".to_string(),
        ("metrics", "discord") => "discord-members".to_string(),
        ("", "target_audience") => "audience".to_string(),
        ("", "treasury_funded") => "treasury".to_string(),
        (_, other) => other.to_string(),
    }
}

fn label_of(prop: &Value, key: &str) -> String {
    if let Some(title) = prop.get("title").and_then(Value::as_str) {
        return title.to_string();
    }
    prettify(key)
}

/// "target_audience" -> "Target Audience", "github-stars" -> "Github Stars".
fn prettify(key: &str) -> String {
    key.split(['_', '-'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
