//! Remote icon sources (Discord invites, GitHub repositories).
//!
//! Each source exposes the same two-step contract: extract a remote
//! identifier from a stored URL, then resolve that identifier to icon bytes
//! plus a human-readable display name. Extraction never errors on malformed
//! input; it just returns `None`. Fetching errors are classified so the
//! batch driver can log and skip the record.

mod extract;

pub mod discord;
pub mod github;

pub use discord::DiscordSource;
pub use extract::{extract_invite_code, extract_repo_slug};
pub use github::GithubSource;

use thiserror::Error;

use crate::store::WebLinks;

/// Identifier resolved from a stored URL. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteId {
    /// Discord invite code (the `abc123` in `discord.gg/abc123`).
    Invite(String),
    /// GitHub repository slug.
    Repo { owner: String, repo: String },
}

/// Raw icon bytes plus the display name reported by the remote side.
#[derive(Debug, Clone)]
pub struct FetchedIcon {
    pub bytes: Vec<u8>,
    pub display_name: String,
}

/// Errors from resolving or downloading a remote icon.
///
/// All variants are "skip this record" class; the batch never aborts on them.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u32 },
    #[error(transparent)]
    Network(#[from] curl::Error),
    #[error("malformed response payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("server does not expose an icon")]
    NoIcon,
    #[error("repository owner has no avatar")]
    NoAvatar,
    #[error("icon decode failed: {0}")]
    Decode(#[from] image::ImageError),
    #[error("identifier does not belong to this source")]
    WrongSource,
}

/// A remote surface that can turn a catalog link into icon bytes.
pub trait IconSource {
    /// Short label used in log lines ("Discord", "GitHub").
    fn label(&self) -> &'static str;

    /// The link field of the record this source reads.
    fn link_of<'a>(&self, web: &'a WebLinks) -> Option<&'a str>;

    /// Parse a stored URL into a remote identifier, or `None` if the
    /// host/path pattern is not recognized.
    fn extract(&self, url: &str) -> Option<RemoteId>;

    /// Resolve the identifier and download the icon bytes.
    fn fetch(&self, id: &RemoteId) -> Result<FetchedIcon, RemoteError>;

    /// Whether fetched bytes should be re-encoded as PNG before saving.
    fn convert_to_png(&self) -> bool {
        false
    }
}
