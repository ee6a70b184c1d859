//! Row assembly: per-record filter attributes and per-column cell HTML.

use serde::Serialize;
use std::collections::HashMap;

use crate::store::{Metrics, ProjectRecord};

use super::columns::Column;

/// One table row: pre-rendered data attributes and a cell per column key.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub attrs: String,
    pub cells: HashMap<String, String>,
}

/// Build all rows. Cells are only produced for the requested columns, so a
/// schema-restricted table stays lean.
pub fn build_rows(records: &[(String, ProjectRecord)], columns: &[Column]) -> Vec<Row> {
    records
        .iter()
        .map(|(name, rec)| Row {
            attrs: filter_attrs(rec),
            cells: columns
                .iter()
                .map(|col| (col.key.clone(), cell_html(&col.key, name, rec)))
                .collect(),
        })
        .collect()
}

/// Minimal HTML escaping for text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn filter_attrs(rec: &ProjectRecord) -> String {
    let readiness = rec.readiness.clone().unwrap_or_default();
    let attrs = [
        ("data-category", rec.category.join("|")),
        ("data-ecosystem", rec.ecosystem.join("|")),
        ("data-layer", rec.layer.join("|")),
        ("data-audience", rec.target_audience.join("|")),
        (
            "data-tech-readiness",
            readiness.technology.unwrap_or_default(),
        ),
        (
            "data-business-readiness",
            readiness.business.unwrap_or_default(),
        ),
        (
            "data-treasury",
            rec.treasury_funded.unwrap_or(false).to_string(),
        ),
        ("data-audit", rec.audit.unwrap_or(false).to_string()),
    ];
    attrs
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_html(v)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn cell_html(key: &str, name: &str, rec: &ProjectRecord) -> String {
    match key {
        "name" => escape_html(name),
        "description" => escape_html(rec.description.as_deref().unwrap_or("")),
        "category" => joined(&rec.category),
        "ecosystem" => joined(&rec.ecosystem),
        "layer" => joined(&rec.layer),
        "audience" => joined(&rec.target_audience),
        "website" => link_cell(rec.web.site.as_deref()),
        "github" => link_cell(rec.web.github.as_deref()),
        "documentation" => link_cell(rec.web.documentation.as_deref()),
        "twitter" => twitter_cell(rec.web.twitter.as_deref()),
        "discord" => link_cell(rec.web.discord.as_deref()),
        "blog" => link_cell(rec.web.blog.as_deref()),
        "contact" => contact_cell(rec.web.contact.as_deref()),
        "playstore" => link_cell(rec.web.playstore.as_deref()),
        "appstore" => link_cell(rec.web.appstore.as_deref()),
        "webstore" => link_cell(rec.web.webstore.as_deref()),
        "logo" => escape_html(rec.web.logo.as_deref().unwrap_or("")),
        "readiness" => readiness_cell(rec),
        "github-stars" => metric_cell(rec, |m| &m.github),
        "twitter-followers" => metric_cell(rec, |m| &m.twitter),
        "discord-members" => metric_cell(rec, |m| &m.discord),
        "treasury" => bool_cell(rec.treasury_funded.unwrap_or(false)),
        "audit" => bool_cell(rec.audit.unwrap_or(false)),
        _ => String::new(),
    }
}

fn joined(values: &[String]) -> String {
    escape_html(&values.join(", "))
}

fn link_cell(url: Option<&str>) -> String {
    match url {
        Some(url) if !url.is_empty() => format!(
            "<a href=\"{}\" target=\"_blank\">Link</a>",
            escape_html(url)
        ),
        _ => String::new(),
    }
}

/// The twitter field holds either a bare handle or a full profile URL.
fn twitter_cell(handle: Option<&str>) -> String {
    let Some(handle) = handle.filter(|h| !h.is_empty()) else {
        return String::new();
    };
    let url = if handle.starts_with("http") {
        handle.to_string()
    } else {
        format!("https://twitter.com/{}", handle)
    };
    let display = handle
        .trim_start_matches("https://twitter.com/")
        .trim_start_matches("https://x.com/");
    format!(
        "<a href=\"{}\" target=\"_blank\">@{}</a>",
        escape_html(&url),
        escape_html(display)
    )
}

fn contact_cell(contact: Option<&str>) -> String {
    let Some(contact) = contact.filter(|c| !c.is_empty()) else {
        return String::new();
    };
    let url = if contact.starts_with("http") {
        contact.to_string()
    } else {
        format!("mailto:{}", contact)
    };
    format!(
        "<a href=\"{}\" target=\"_blank\">{}</a>",
        escape_html(&url),
        escape_html(contact)
    )
}

fn readiness_cell(rec: &ProjectRecord) -> String {
    let Some(readiness) = &rec.readiness else {
        return String::new();
    };
    let mut parts = Vec::new();
    if let Some(tech) = readiness.technology.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("Tech: {}", tech));
    }
    if let Some(business) = readiness.business.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("Business: {}", business));
    }
    escape_html(&parts.join(" | "))
}

fn metric_cell<F>(rec: &ProjectRecord, series: F) -> String
where
    F: Fn(&Metrics) -> &Vec<crate::store::MetricPoint>,
{
    let Some(metrics) = &rec.metrics else {
        return String::new();
    };
    match Metrics::latest(series(metrics)) {
        Some(point) => match &point.value {
            serde_json::Value::String(s) => escape_html(s),
            serde_json::Value::Null => String::new(),
            other => escape_html(&other.to_string()),
        },
        None => String::new(),
    }
}

fn bool_cell(value: bool) -> String {
    if value {
        "<span class=\"boolean-yes\">\u{2713}</span>".to_string()
    } else {
        "<span class=\"boolean-no\">\u{2717}</span>".to_string()
    }
}
