//! CLI for the ecomap directory automation toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ecomap_core::config;
use std::path::PathBuf;

use commands::{run_fetch_discord, run_fetch_github, run_gen_table};

/// Top-level CLI for the ecomap toolkit.
#[derive(Debug, Parser)]
#[command(name = "ecomap")]
#[command(about = "ecomap: ecosystem directory automation (logo backfill, HTML table)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch Discord server icons for records whose logo is missing or still the default.
    FetchDiscord {
        /// Directory that stores project YAML files.
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
        /// Directory that stores logo images.
        #[arg(long, default_value = "img")]
        img_dir: PathBuf,
        /// Also scan records under data/team/.
        #[arg(long)]
        include_team: bool,
        /// Show actions without writing files.
        #[arg(long)]
        dry_run: bool,
        /// Process at most N record files.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Fetch GitHub owner avatars for records whose logo is missing or still the default.
    FetchGithub {
        /// Directory that stores project YAML files.
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
        /// Directory that stores logo images.
        #[arg(long, default_value = "img")]
        img_dir: PathBuf,
        /// Also scan records under data/team/.
        #[arg(long)]
        include_team: bool,
        /// Show actions without writing files.
        #[arg(long)]
        dry_run: bool,
        /// Process at most N record files.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
        /// GitHub token to raise API rate limits (default: env GITHUB_TOKEN/GH_TOKEN).
        #[arg(long)]
        token: Option<String>,
    },

    /// Generate the HTML table (and optional JSON export) from all records.
    GenTable {
        /// Directory that stores project YAML files.
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
        /// Output HTML file (default comes from config).
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also write the full record set as JSON to this file.
        #[arg(long)]
        json_out: Option<PathBuf>,
        /// Derive the column list from this JSON-Schema document.
        #[arg(long)]
        schema: Option<PathBuf>,
        /// Also include records under data/team/.
        #[arg(long)]
        include_team: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::FetchDiscord {
                data_dir,
                img_dir,
                include_team,
                dry_run,
                limit,
            } => run_fetch_discord(&cfg, &data_dir, &img_dir, include_team, dry_run, limit)?,
            CliCommand::FetchGithub {
                data_dir,
                img_dir,
                include_team,
                dry_run,
                limit,
                token,
            } => run_fetch_github(&cfg, &data_dir, &img_dir, include_team, dry_run, limit, token)?,
            CliCommand::GenTable {
                data_dir,
                out,
                json_out,
                schema,
                include_team,
            } => run_gen_table(&cfg, &data_dir, out, json_out, schema, include_team)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
