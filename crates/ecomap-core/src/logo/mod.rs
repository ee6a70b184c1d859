//! Logo resolution: decide whether a record needs a fetch, what filename the
//! fetched icon gets, and how collisions with existing assets are avoided.

mod convert;
mod sanitize;

pub mod batch;

pub use batch::{run_batch, BatchOptions, BatchSummary, RecordOutcome};
pub use convert::to_png_rgba;
pub use sanitize::sanitize_basename;

use std::path::Path;

/// Placeholder filename meaning "no real logo yet".
pub const SENTINEL_LOGO: &str = "default.png";

/// Policy knobs for filename resolution, shared by all icon sources.
#[derive(Debug, Clone)]
pub struct LogoPolicy {
    /// Extensions an existing logo filename may have to be reused in place.
    /// PNG only: everything the batch writes is PNG.
    pub accepted_extensions: Vec<String>,
    /// Base name used when sanitizing the project name yields nothing.
    pub fallback_basename: String,
}

impl Default for LogoPolicy {
    fn default() -> Self {
        Self {
            accepted_extensions: vec!["png".to_string()],
            fallback_basename: "project-logo".to_string(),
        }
    }
}

/// Chosen on-disk filename for a fetched icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetName {
    pub filename: String,
    /// True when the record's existing filename is reused (refresh in place).
    pub reused: bool,
}

/// A record needs a logo when its field holds the sentinel value or points
/// at a file that does not exist under the image directory.
pub fn needs_logo(logo: &str, img_dir: &Path) -> bool {
    if logo == SENTINEL_LOGO {
        return true;
    }
    match Path::new(logo).file_name() {
        Some(name) => !img_dir.join(name).exists(),
        None => true,
    }
}

/// Decide the final filename for freshly fetched icon bytes.
///
/// An existing non-sentinel filename with an accepted extension is reused
/// exactly (intentional overwrite). Anything else derives a sanitized name
/// from the project's display name and steers around existing files.
pub fn resolve_target_filename(
    current_logo: &str,
    display_name: &str,
    img_dir: &Path,
    policy: &LogoPolicy,
) -> TargetName {
    if current_logo != SENTINEL_LOGO {
        let path = Path::new(current_logo);
        let ext_accepted = path
            .extension()
            .and_then(|e| e.to_str())
            .map_or(false, |ext| {
                policy
                    .accepted_extensions
                    .iter()
                    .any(|a| a.eq_ignore_ascii_case(ext))
            });
        if ext_accepted {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                return TargetName {
                    filename: name.to_string(),
                    reused: true,
                };
            }
        }
    }

    let base = sanitize_basename(display_name, &policy.fallback_basename);
    TargetName {
        filename: pick_filename(&format!("{}.png", base), img_dir),
        reused: false,
    }
}

/// First filename in `suggested`, `stem-1.ext`, `stem-2.ext`, … that does not
/// exist in `img_dir`. Check-then-claim; the batch is the only writer.
pub fn pick_filename(suggested: &str, img_dir: &Path) -> String {
    if !img_dir.join(suggested).exists() {
        return suggested.to_string();
    }

    let path = Path::new(suggested);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(suggested);
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default();

    let mut counter = 1;
    loop {
        let candidate = format!("{}-{}{}", stem, counter, ext);
        if !img_dir.join(&candidate).exists() {
            return candidate;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn sentinel_needs_logo() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(needs_logo(SENTINEL_LOGO, tmp.path()));
    }

    #[test]
    fn missing_file_needs_logo() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(needs_logo("gone.png", tmp.path()));
    }

    #[test]
    fn existing_file_does_not_need_logo() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("here.png"), b"x").unwrap();
        assert!(!needs_logo("here.png", tmp.path()));
    }

    #[test]
    fn reuses_existing_png_name() {
        let tmp = tempfile::tempdir().unwrap();
        let target =
            resolve_target_filename("icon.png", "Acme", tmp.path(), &LogoPolicy::default());
        assert_eq!(target.filename, "icon.png");
        assert!(target.reused);
    }

    #[test]
    fn sentinel_derives_from_name() {
        let tmp = tempfile::tempdir().unwrap();
        let target =
            resolve_target_filename(SENTINEL_LOGO, "Acme Corp", tmp.path(), &LogoPolicy::default());
        assert_eq!(target.filename, "Acme-Corp.png");
        assert!(!target.reused);
    }

    #[test]
    fn unaccepted_extension_derives() {
        let tmp = tempfile::tempdir().unwrap();
        let target =
            resolve_target_filename("icon.jpeg", "Acme", tmp.path(), &LogoPolicy::default());
        assert_eq!(target.filename, "Acme.png");
        assert!(!target.reused);
    }

    #[test]
    fn derived_name_steers_around_existing_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("Acme.png"), b"x").unwrap();
        let target =
            resolve_target_filename(SENTINEL_LOGO, "Acme", tmp.path(), &LogoPolicy::default());
        assert_eq!(target.filename, "Acme-1.png");
    }

    #[test]
    fn pick_filename_counts_up() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("name.png"), b"x").unwrap();
        fs::write(tmp.path().join("name-1.png"), b"x").unwrap();
        assert_eq!(pick_filename("name.png", tmp.path()), "name-2.png");
    }

    #[test]
    fn pick_filename_free_name_unchanged() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(pick_filename("fresh.png", tmp.path()), "fresh.png");
    }
}
