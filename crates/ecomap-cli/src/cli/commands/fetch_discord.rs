//! `ecomap fetch-discord` – backfill logos from Discord server icons.

use anyhow::Result;
use ecomap_core::config::EcomapConfig;
use ecomap_core::remote::DiscordSource;
use std::path::Path;

use super::fetch::{http_client, run_fetch};

pub fn run_fetch_discord(
    cfg: &EcomapConfig,
    data_dir: &Path,
    img_dir: &Path,
    include_team: bool,
    dry_run: bool,
    limit: Option<usize>,
) -> Result<()> {
    let source = DiscordSource::new(http_client(cfg));
    run_fetch(&source, data_dir, img_dir, include_team, dry_run, limit)
}
