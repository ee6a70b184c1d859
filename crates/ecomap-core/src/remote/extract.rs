//! Remote identifier extraction from stored catalog URLs.
//!
//! Malformed input never errors; unsupported hosts/paths yield `None`.

use url::Url;

/// Extract a Discord invite code from an invite URL.
///
/// Recognized forms:
/// - `https://discord.gg/<code>` (first path segment)
/// - `https://discord.com/invite/<code>` (remainder after `invite/`)
///
/// `discord.com/widget?id=...` links are recognized and rejected: the widget
/// endpoint does not expose a guild icon hash.
pub fn extract_invite_code(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    let path = parsed.path().trim_matches('/');
    if path.is_empty() {
        return None;
    }

    if host.contains("discord.gg") {
        return path.split('/').next().map(|s| s.to_string());
    }

    if host.contains("discord.com") {
        if let Some(code) = path.strip_prefix("invite/") {
            return Some(code.to_string());
        }
        // widget?id=<guild_id> carries no icon hash
        return None;
    }

    None
}

/// Extract an `(owner, repo)` pair from a GitHub repository URL.
///
/// The host must be exactly `github.com` (or its `www.` alias) and the path
/// must have at least two non-empty segments. A trailing `.git` is stripped.
pub fn extract_repo_slug(url: &str) -> Option<(String, String)> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    if host != "github.com" && host != "www.github.com" {
        return None;
    }

    let mut segments = parsed
        .path()
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty());
    let owner = segments.next()?;
    let repo = segments.next()?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    Some((owner.to_string(), repo.to_string()))
}
