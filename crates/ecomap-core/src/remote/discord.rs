//! Discord invite lookup + CDN icon download.

use serde::Deserialize;

use crate::http::HttpClient;
use crate::store::WebLinks;

use super::{extract_invite_code, FetchedIcon, IconSource, RemoteError, RemoteId};

const INVITE_ENDPOINT: &str = "https://discord.com/api/v10/invites";
const ICON_CDN: &str = "https://cdn.discordapp.com/icons";

/// Subset of the invite lookup payload we care about.
#[derive(Debug, Deserialize)]
struct InvitePayload {
    #[serde(default)]
    guild: Option<InviteGuild>,
}

#[derive(Debug, Deserialize)]
struct InviteGuild {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// Icon source backed by the Discord invite API and icon CDN.
pub struct DiscordSource {
    client: HttpClient,
}

impl DiscordSource {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

impl IconSource for DiscordSource {
    fn label(&self) -> &'static str {
        "Discord"
    }

    fn link_of<'a>(&self, web: &'a WebLinks) -> Option<&'a str> {
        web.discord.as_deref()
    }

    fn extract(&self, url: &str) -> Option<RemoteId> {
        extract_invite_code(url).map(RemoteId::Invite)
    }

    fn fetch(&self, id: &RemoteId) -> Result<FetchedIcon, RemoteError> {
        let RemoteId::Invite(code) = id else {
            return Err(RemoteError::WrongSource);
        };

        let payload: InvitePayload = self.client.get_json(
            &format!("{}/{}", INVITE_ENDPOINT, code),
            &[("with_counts", "true"), ("with_expiration", "true")],
        )?;

        let guild = payload.guild.ok_or(RemoteError::NoIcon)?;
        let (guild_id, icon_hash) = match (&guild.id, &guild.icon) {
            (Some(id), Some(hash)) => (id, hash),
            _ => return Err(RemoteError::NoIcon),
        };

        // Animated icons are only served as GIF.
        let extension = if icon_hash.starts_with("a_") { "gif" } else { "png" };
        let icon_url = format!("{}/{}/{}.{}", ICON_CDN, guild_id, icon_hash, extension);
        let bytes = self.client.get_bytes(&icon_url, &[])?;

        let display_name = guild.name.clone().unwrap_or_else(|| code.clone());
        Ok(FetchedIcon {
            bytes,
            display_name,
        })
    }

    // The CDN may hand back GIF or JPEG; normalize everything to PNG so the
    // catalog only ever references one format.
    fn convert_to_png(&self) -> bool {
        true
    }
}
