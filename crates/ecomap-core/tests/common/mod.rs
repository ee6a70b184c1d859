//! Shared test fixtures: a tempdir catalog and an in-process icon source.
#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use ecomap_core::remote::{FetchedIcon, IconSource, RemoteError, RemoteId};
use ecomap_core::store::WebLinks;

/// Icon source that accepts any `discord.gg` invite link and serves fixed
/// bytes, counting fetches. No network, no image decoding (raw passthrough).
pub struct FakeSource {
    pub bytes: Vec<u8>,
    pub fetches: RefCell<usize>,
    pub fail: bool,
}

impl FakeSource {
    pub fn serving(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            fetches: RefCell::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            bytes: Vec::new(),
            fetches: RefCell::new(0),
            fail: true,
        }
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetches.borrow()
    }
}

impl IconSource for FakeSource {
    fn label(&self) -> &'static str {
        "Fake"
    }

    fn link_of<'a>(&self, web: &'a WebLinks) -> Option<&'a str> {
        web.discord.as_deref()
    }

    fn extract(&self, url: &str) -> Option<RemoteId> {
        ecomap_core::remote::extract_invite_code(url).map(RemoteId::Invite)
    }

    fn fetch(&self, _id: &RemoteId) -> Result<FetchedIcon, RemoteError> {
        *self.fetches.borrow_mut() += 1;
        if self.fail {
            return Err(RemoteError::NoIcon);
        }
        Ok(FetchedIcon {
            bytes: self.bytes.clone(),
            display_name: "Fake Guild".to_string(),
        })
    }
}

pub fn write_record(data_dir: &Path, rel: &str, content: &str) {
    let path = data_dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
