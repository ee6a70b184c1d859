//! `ecomap fetch-github` – backfill logos from GitHub owner avatars.

use anyhow::Result;
use ecomap_core::config::EcomapConfig;
use ecomap_core::remote::GithubSource;
use std::path::Path;

use super::fetch::{http_client, run_fetch};

pub fn run_fetch_github(
    cfg: &EcomapConfig,
    data_dir: &Path,
    img_dir: &Path,
    include_team: bool,
    dry_run: bool,
    limit: Option<usize>,
    token: Option<String>,
) -> Result<()> {
    let token = token
        .or_else(|| std::env::var("GITHUB_TOKEN").ok())
        .or_else(|| std::env::var("GH_TOKEN").ok())
        .filter(|t| !t.trim().is_empty());
    if token.is_none() {
        tracing::debug!("no GitHub token; unauthenticated rate limits apply");
    }

    let client = http_client(cfg).with_bearer_token(token);
    let source = GithubSource::new(client, cfg.avatar_size);
    run_fetch(&source, data_dir, img_dir, include_team, dry_run, limit)
}
