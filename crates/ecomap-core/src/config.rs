use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/ecomap/config.toml`.
///
/// Holds the knobs shared by all subcommands: HTTP timeouts, User-Agent,
/// and the avatar size requested from GitHub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcomapConfig {
    /// Connect timeout per HTTP request, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout per HTTP request, in seconds. A timeout counts as a
    /// fetch failure for that record only; the batch continues.
    pub request_timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Pixel size requested for GitHub avatars (`?size=N`).
    pub avatar_size: u32,
    /// Default output filename for the generated HTML table.
    pub table_output: String,
}

impl Default for EcomapConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            request_timeout_secs: 20,
            user_agent: "ecomap-logo-fetcher/1.0".to_string(),
            avatar_size: 512,
            table_output: "ecosystem_table.html".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ecomap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<EcomapConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = EcomapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: EcomapConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = EcomapConfig::default();
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.request_timeout_secs, 20);
        assert_eq!(cfg.avatar_size, 512);
        assert_eq!(cfg.table_output, "ecosystem_table.html");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = EcomapConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: EcomapConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
        assert_eq!(parsed.user_agent, cfg.user_agent);
        assert_eq!(parsed.avatar_size, cfg.avatar_size);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            connect_timeout_secs = 5
            request_timeout_secs = 10
            user_agent = "custom-agent/2.0"
            avatar_size = 256
            table_output = "out.html"
        "#;
        let cfg: EcomapConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.user_agent, "custom-agent/2.0");
        assert_eq!(cfg.avatar_size, 256);
        assert_eq!(cfg.table_output, "out.html");
    }
}
