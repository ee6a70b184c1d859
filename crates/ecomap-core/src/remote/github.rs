//! GitHub repository metadata lookup + owner avatar download.

use serde::Deserialize;

use crate::http::HttpClient;
use crate::store::WebLinks;

use super::{extract_repo_slug, FetchedIcon, IconSource, RemoteError, RemoteId};

const REPO_ENDPOINT: &str = "https://api.github.com/repos";

#[derive(Debug, Deserialize)]
struct RepoPayload {
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    owner: Option<RepoOwner>,
}

#[derive(Debug, Deserialize)]
struct RepoOwner {
    #[serde(default)]
    avatar_url: Option<String>,
}

/// Icon source backed by the GitHub repository API.
pub struct GithubSource {
    client: HttpClient,
    avatar_size: u32,
}

impl GithubSource {
    /// `client` should carry a bearer token when one is available; anonymous
    /// requests hit the low unauthenticated rate limit quickly.
    pub fn new(client: HttpClient, avatar_size: u32) -> Self {
        Self {
            client,
            avatar_size,
        }
    }
}

impl IconSource for GithubSource {
    fn label(&self) -> &'static str {
        "GitHub"
    }

    fn link_of<'a>(&self, web: &'a WebLinks) -> Option<&'a str> {
        web.github.as_deref()
    }

    fn extract(&self, url: &str) -> Option<RemoteId> {
        extract_repo_slug(url).map(|(owner, repo)| RemoteId::Repo { owner, repo })
    }

    fn fetch(&self, id: &RemoteId) -> Result<FetchedIcon, RemoteError> {
        let RemoteId::Repo { owner, repo } = id else {
            return Err(RemoteError::WrongSource);
        };

        let payload: RepoPayload = self
            .client
            .get_json(&format!("{}/{}/{}", REPO_ENDPOINT, owner, repo), &[])?;

        let avatar_url = payload
            .owner
            .and_then(|o| o.avatar_url)
            .ok_or(RemoteError::NoAvatar)?;

        let size = self.avatar_size.to_string();
        let bytes = self.client.get_bytes(&avatar_url, &[("size", &size)])?;

        let display_name = payload
            .full_name
            .unwrap_or_else(|| format!("{}/{}", owner, repo));
        Ok(FetchedIcon {
            bytes,
            display_name,
        })
    }
}
