//! Batch driver: one sequential pass over the catalog, one fetch attempt per
//! record that needs a logo.
//!
//! Skip-class problems (missing field, no link, unsupported link, fetch
//! failure) are logged and local to the record. Filesystem write failures
//! propagate and abort the run.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::remote::IconSource;
use crate::store::{self, RecordFile};

use super::{needs_logo, resolve_target_filename, to_png_rgba, LogoPolicy};

#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Also process records under the reserved `team/` subtree.
    pub include_team: bool,
    /// Compute every decision but write nothing.
    pub dry_run: bool,
    /// Cap on the number of records inspected (not on successes).
    pub limit: Option<usize>,
}

/// Terminal state of one record in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Logo field points at an existing non-sentinel file; nothing to do.
    SkipHasLogo,
    /// Record has no `web.logo` field at all.
    MissingLogoField,
    /// Needed a logo but has no link for this source.
    NoSourceLink,
    /// Link present but its host/path pattern is not recognized.
    UnsupportedSource,
    /// Lookup or download failed; logged, batch continues.
    FetchFailed,
    /// Icon written (or would be, in dry-run); record possibly rewritten.
    Resolved { filename: String, rewrote: bool },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchSummary {
    pub processed: usize,
    pub downloaded: usize,
    pub skipped: usize,
}

/// Run the logo resolution procedure over every record file.
///
/// Idempotent: a record whose logo already resolves to an existing file is
/// left untouched, so a second run over an unchanged store downloads nothing.
pub fn run_batch(
    data_dir: &Path,
    img_dir: &Path,
    source: &dyn IconSource,
    policy: &LogoPolicy,
    opts: &BatchOptions,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for path in store::catalog_files(data_dir, opts.include_team)? {
        if let Some(limit) = opts.limit {
            if summary.processed >= limit {
                break;
            }
        }
        summary.processed += 1;

        let mut rec = match RecordFile::load(&path) {
            Ok(rec) => rec,
            Err(err) => {
                tracing::warn!("skipping {} (unreadable: {:#})", path.display(), err);
                summary.skipped += 1;
                continue;
            }
        };

        match process_record(&mut rec, img_dir, source, policy, opts)? {
            RecordOutcome::SkipHasLogo => {}
            RecordOutcome::Resolved { .. } => summary.downloaded += 1,
            _ => summary.skipped += 1,
        }
    }

    tracing::info!(
        "processed {} record files: downloaded {} icons, skipped {} entries",
        summary.processed,
        summary.downloaded,
        summary.skipped
    );
    Ok(summary)
}

fn process_record(
    rec: &mut RecordFile,
    img_dir: &Path,
    source: &dyn IconSource,
    policy: &LogoPolicy,
    opts: &BatchOptions,
) -> Result<RecordOutcome> {
    let project = rec.display_name();

    let Some(logo_name) = rec.record.web.logo.clone() else {
        tracing::warn!("skipping {} (missing web.logo)", project);
        return Ok(RecordOutcome::MissingLogoField);
    };

    if !needs_logo(&logo_name, img_dir) {
        return Ok(RecordOutcome::SkipHasLogo);
    }

    let Some(link) = source.link_of(&rec.record.web).map(str::to_string) else {
        tracing::info!("skipping {} (no {} link)", project, source.label());
        return Ok(RecordOutcome::NoSourceLink);
    };

    let Some(remote_id) = source.extract(&link) else {
        tracing::warn!(
            "skipping {} (unsupported {} URL: {})",
            project,
            source.label(),
            link
        );
        return Ok(RecordOutcome::UnsupportedSource);
    };

    let icon = match source.fetch(&remote_id) {
        Ok(icon) => icon,
        Err(err) => {
            tracing::error!("failed to fetch icon for {}: {}", project, err);
            return Ok(RecordOutcome::FetchFailed);
        }
    };

    let bytes = if source.convert_to_png() {
        match to_png_rgba(&icon.bytes) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::error!("failed to decode icon for {}: {}", project, err);
                return Ok(RecordOutcome::FetchFailed);
            }
        }
    } else {
        icon.bytes
    };

    let target = resolve_target_filename(&logo_name, &project, img_dir, policy);
    let target_path = img_dir.join(&target.filename);

    if opts.dry_run {
        tracing::info!(
            "[dry-run] would save icon for {} ({}) -> {}",
            project,
            icon.display_name,
            target_path.display()
        );
    } else {
        fs::create_dir_all(img_dir)
            .with_context(|| format!("creating image dir {}", img_dir.display()))?;
        fs::write(&target_path, &bytes)
            .with_context(|| format!("writing icon {}", target_path.display()))?;
        tracing::info!(
            "saved {} for {} ({}: {})",
            target_path.display(),
            project,
            source.label(),
            icon.display_name
        );
    }

    let mut rewrote = false;
    if target.filename != logo_name {
        if opts.dry_run {
            tracing::info!(
                "[dry-run] would update {} web.logo -> {}",
                rec.path.display(),
                target.filename
            );
        } else {
            rec.write_logo(&target.filename)?;
            rewrote = true;
        }
    }

    Ok(RecordOutcome::Resolved {
        filename: target.filename,
        rewrote,
    })
}
