//! HTML table generation: the whole catalog as one self-contained page.
//!
//! The page is a Tera template fed with pre-rendered rows, filter groups,
//! the column list, and a JSON blob of the full record set for client-side
//! consumers. The record set can also be written to a standalone JSON file.

mod columns;
mod filters;
mod rows;

pub use columns::{columns_from_schema, default_columns, Column};
pub use filters::{collect_filter_groups, FilterGroup, FilterOption};
pub use rows::{build_rows, escape_html, Row};

use anyhow::{bail, Context, Result};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::{self, RecordFile};

const TEMPLATE: &str = include_str!("../../templates/table.html.tera");
const PAGE_TITLE: &str = "Ecosystem Map - All Projects";

#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// JSON-Schema document the column list is derived from.
    pub schema: Option<PathBuf>,
    /// Also write the full record set as a standalone JSON file.
    pub json_out: Option<PathBuf>,
    /// Include records under the reserved `team/` subtree.
    pub include_team: bool,
}

/// Render the table for every record under `data_dir` into `out_path`.
///
/// Returns the number of records rendered. An empty record set is an error;
/// individual unparseable files are logged and skipped.
pub fn generate(data_dir: &Path, out_path: &Path, opts: &TableOptions) -> Result<usize> {
    let mut records = Vec::new();
    for path in store::catalog_files(data_dir, opts.include_team)? {
        match RecordFile::load(&path) {
            Ok(rec) => {
                let name = rec.display_name();
                let mut record = rec.record;
                // The JSON blob and name cells always carry a usable name.
                record.name = Some(name.clone());
                records.push((name, record));
            }
            Err(err) => {
                tracing::warn!("skipping {} ({:#})", path.display(), err);
            }
        }
    }
    if records.is_empty() {
        bail!("no project records found under {}", data_dir.display());
    }
    records.sort_by(|a, b| a.0.cmp(&b.0));

    let columns = match &opts.schema {
        Some(schema) => columns_from_schema(schema)?,
        None => default_columns(),
    };

    let plain_records: Vec<_> = records.iter().map(|(_, rec)| rec.clone()).collect();
    let filter_groups = collect_filter_groups(&plain_records);
    let table_rows = build_rows(&records, &columns);

    let filter_groups_json = serde_json::to_string(
        &filter_groups
            .iter()
            .map(|g| json!({ "key": g.key, "attr": g.attr, "multi": g.multi }))
            .collect::<Vec<_>>(),
    )?;
    let data_json = serde_json::to_string(&plain_records)?;

    let mut tera = tera::Tera::default();
    tera.add_raw_template("table.html", TEMPLATE)
        .context("loading embedded table template")?;

    let mut ctx = tera::Context::new();
    ctx.insert("title", PAGE_TITLE);
    ctx.insert("total", &records.len());
    ctx.insert("columns", &columns);
    ctx.insert("filter_groups", &filter_groups);
    ctx.insert("filter_groups_json", &filter_groups_json);
    ctx.insert("rows", &table_rows);
    ctx.insert("data_json", &data_json);

    let html = tera
        .render("table.html", &ctx)
        .context("rendering table template")?;

    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(out_path, html)
        .with_context(|| format!("writing table {}", out_path.display()))?;
    tracing::info!("wrote HTML table to {}", out_path.display());

    if let Some(json_path) = &opts.json_out {
        let pretty = serde_json::to_string_pretty(&plain_records)?;
        fs::write(json_path, pretty)
            .with_context(|| format!("writing record JSON {}", json_path.display()))?;
        tracing::info!("wrote record JSON to {}", json_path.display());
    }

    Ok(records.len())
}
