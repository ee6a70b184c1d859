//! Catalog record store: one YAML file per project under a data directory.

mod record;
mod rewrite;

pub use record::{MetricPoint, Metrics, ProjectRecord, Readiness, WebLinks};
pub use rewrite::rewrite_logo_field;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reserved subtree holding team-internal records, skipped by default.
pub const TEAM_SUBDIR: &str = "team";

/// A loaded record: raw text (kept for format-preserving rewrites) plus the
/// typed view.
#[derive(Debug, Clone)]
pub struct RecordFile {
    pub path: PathBuf,
    pub raw: String,
    pub record: ProjectRecord,
}

impl RecordFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading record {}", path.display()))?;
        let record: ProjectRecord = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing record {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            raw,
            record,
        })
    }

    /// Project display name: the `name` field, or the file stem as fallback.
    pub fn display_name(&self) -> String {
        self.record
            .name
            .clone()
            .unwrap_or_else(|| {
                self.path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
    }

    /// Rewrite `web.logo` in place, preserving the file's formatting.
    pub fn write_logo(&mut self, new_logo: &str) -> Result<()> {
        let updated = rewrite_logo_field(&self.raw, new_logo).with_context(|| {
            format!("no web.logo field to rewrite in {}", self.path.display())
        })?;
        fs::write(&self.path, &updated)
            .with_context(|| format!("writing record {}", self.path.display()))?;
        self.raw = updated;
        self.record.web.logo = Some(new_logo.to_string());
        Ok(())
    }
}

/// Enumerate all `*.yaml` record files under `data_dir`, sorted by path.
///
/// The `team/` subtree directly under the root is excluded unless
/// `include_team` is set.
pub fn catalog_files(data_dir: &Path, include_team: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_yaml_files(data_dir, &mut files)
        .with_context(|| format!("scanning data dir {}", data_dir.display()))?;

    if !include_team {
        let team_root = data_dir.join(TEAM_SUBDIR);
        files.retain(|p| !p.starts_with(&team_root));
    }

    files.sort();
    Ok(files)
}

fn collect_yaml_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect_yaml_files(&path, out)?;
        } else if path.extension().map_or(false, |e| e == "yaml") {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn enumerates_sorted_and_skips_team() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "b.yaml", "name: B\n");
        write(tmp.path(), "a.yaml", "name: A\n");
        write(tmp.path(), "team/t.yaml", "name: T\n");
        write(tmp.path(), "notes.txt", "ignored");

        let files = catalog_files(tmp.path(), false).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["a.yaml", "b.yaml"]);

        let with_team = catalog_files(tmp.path(), true).unwrap();
        assert_eq!(with_team.len(), 3);
    }

    #[test]
    fn display_name_falls_back_to_stem() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "acme-corp.yaml", "web:\n  logo: default.png\n");
        let rec = RecordFile::load(&tmp.path().join("acme-corp.yaml")).unwrap();
        assert_eq!(rec.display_name(), "acme-corp");
    }

    #[test]
    fn write_logo_updates_file_and_view() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "p.yaml",
            "name: P\nweb:\n  logo: default.png # todo\n",
        );
        let path = tmp.path().join("p.yaml");
        let mut rec = RecordFile::load(&path).unwrap();
        rec.write_logo("p.png").unwrap();
        assert_eq!(rec.record.web.logo.as_deref(), Some("p.png"));
        let on_disk = fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, "name: P\nweb:\n  logo: p.png # todo\n");
    }
}
