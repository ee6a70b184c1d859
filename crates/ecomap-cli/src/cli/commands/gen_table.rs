//! `ecomap gen-table` – render all records as a filterable HTML table.

use anyhow::Result;
use ecomap_core::config::EcomapConfig;
use ecomap_core::table::{self, TableOptions};
use std::path::{Path, PathBuf};

pub fn run_gen_table(
    cfg: &EcomapConfig,
    data_dir: &Path,
    out: Option<PathBuf>,
    json_out: Option<PathBuf>,
    schema: Option<PathBuf>,
    include_team: bool,
) -> Result<()> {
    let out_path = out.unwrap_or_else(|| PathBuf::from(&cfg.table_output));
    let opts = TableOptions {
        schema,
        json_out,
        include_team,
    };

    let count = table::generate(data_dir, &out_path, &opts)?;
    println!("Rendered {} projects to {}", count, out_path.display());
    Ok(())
}
