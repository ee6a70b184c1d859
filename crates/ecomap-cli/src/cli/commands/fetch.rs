//! Shared driver for both fetch subcommands.

use anyhow::{bail, Result};
use ecomap_core::config::EcomapConfig;
use ecomap_core::http::HttpClient;
use ecomap_core::logo::{run_batch, BatchOptions, LogoPolicy};
use ecomap_core::remote::IconSource;
use std::path::Path;
use std::time::Duration;

pub fn http_client(cfg: &EcomapConfig) -> HttpClient {
    HttpClient::new(
        &cfg.user_agent,
        Duration::from_secs(cfg.connect_timeout_secs),
        Duration::from_secs(cfg.request_timeout_secs),
    )
}

/// Run the batch and enforce the exit contract: zero downloads is a failure.
pub fn run_fetch(
    source: &dyn IconSource,
    data_dir: &Path,
    img_dir: &Path,
    include_team: bool,
    dry_run: bool,
    limit: Option<usize>,
) -> Result<()> {
    let opts = BatchOptions {
        include_team,
        dry_run,
        limit,
    };
    let summary = run_batch(data_dir, img_dir, source, &LogoPolicy::default(), &opts)?;

    println!(
        "Processed {} record files: downloaded {} icons, skipped {} entries",
        summary.processed, summary.downloaded, summary.skipped
    );

    if summary.downloaded == 0 {
        bail!("no icons downloaded");
    }
    Ok(())
}
