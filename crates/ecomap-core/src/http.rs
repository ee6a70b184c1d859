//! Minimal blocking HTTP GET client on the curl crate (libcurl).
//!
//! One request per call, no retries. A single failure is reported to the
//! caller, which logs it and moves on to the next record.

use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::remote::RemoteError;

/// Blocking GET client with fixed timeouts and a stable User-Agent.
#[derive(Debug, Clone)]
pub struct HttpClient {
    user_agent: String,
    connect_timeout: Duration,
    timeout: Duration,
    bearer_token: Option<String>,
}

impl HttpClient {
    pub fn new(user_agent: &str, connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.to_string(),
            connect_timeout,
            timeout,
            bearer_token: None,
        }
    }

    /// Attach a bearer token sent as `Authorization: Bearer <token>`
    /// (GitHub API rate-limit relief).
    pub fn with_bearer_token(mut self, token: Option<String>) -> Self {
        self.bearer_token = token;
        self
    }

    /// GET `url` (with optional extra query pairs appended) and return the body bytes.
    ///
    /// Follows redirects. Non-2xx responses are an error; so is an unparseable URL.
    pub fn get_bytes(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, RemoteError> {
        let mut parsed =
            Url::parse(url).map_err(|_| RemoteError::InvalidUrl(url.to_string()))?;
        if !query.is_empty() {
            let mut pairs = parsed.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }

        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(parsed.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.useragent(&self.user_agent)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        if let Some(token) = &self.bearer_token {
            let mut list = curl::easy::List::new();
            list.append(&format!("Authorization: Bearer {}", token.trim()))?;
            easy.http_headers(list)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(RemoteError::Status {
                url: parsed.to_string(),
                status: code,
            });
        }

        Ok(body)
    }

    /// GET `url` and deserialize the JSON body.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RemoteError> {
        let body = self.get_bytes(url, query)?;
        Ok(serde_json::from_slice(&body)?)
    }
}
