//! In-memory address bar for tests, the CLI and headless use.
//!
//! [`InMemoryLocation`] keeps a parsed URL and a session history behind a
//! `RwLock`. It behaves like a browser tab's location: assigning a new
//! fragment adds a history entry, assigning the same one does nothing, and
//! [`Location::reset_to_path`] pushes a fragment-free entry unless the URL
//! has none already.
//!
//! Fragments are compared after percent-encoding, so `a b` and `a%20b` are
//! the same fragment.

use std::sync::RwLock;

use url::Url;

use crate::error::{LocationError, LocationResult};
use crate::traits::Location;

#[derive(Debug)]
struct AddressBar {
    current: Url,
    history: Vec<Url>,
}

impl AddressBar {
    fn push(&mut self, url: Url) {
        self.current = url.clone();
        self.history.push(url);
    }
}

/// An in-memory implementation of [`Location`].
#[derive(Debug)]
pub struct InMemoryLocation {
    bar: RwLock<AddressBar>,
}

impl InMemoryLocation {
    /// Open `href` as the first history entry.
    pub fn new(href: &str) -> LocationResult<Self> {
        let current = Url::parse(href).map_err(|e| LocationError::InvalidUrl {
            url: href.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            bar: RwLock::new(AddressBar {
                history: vec![current.clone()],
                current,
            }),
        })
    }

    /// Every URL visited so far, oldest first. The last entry is current.
    pub fn history(&self) -> LocationResult<Vec<String>> {
        let bar = self.bar.read().map_err(|e| LocationError::Poisoned(e.to_string()))?;
        Ok(bar.history.iter().map(|url| url.to_string()).collect())
    }
}

impl Location for InMemoryLocation {
    fn hash(&self) -> LocationResult<String> {
        let bar = self.bar.read().map_err(|e| LocationError::Poisoned(e.to_string()))?;
        Ok(bar.current.fragment().unwrap_or_default().to_string())
    }

    fn set_hash(&self, hash: &str) -> LocationResult<bool> {
        let mut bar = self.bar.write().map_err(|e| LocationError::Poisoned(e.to_string()))?;
        let mut next = bar.current.clone();
        next.set_fragment(Some(hash));
        if next.fragment() == bar.current.fragment() {
            return Ok(false);
        }
        bar.push(next);
        Ok(true)
    }

    fn reset_to_path(&self) -> LocationResult<bool> {
        let mut bar = self.bar.write().map_err(|e| LocationError::Poisoned(e.to_string()))?;
        if bar.current.fragment().is_none() {
            return Ok(false);
        }
        let mut next = bar.current.clone();
        next.set_fragment(None);
        bar.push(next);
        Ok(true)
    }

    fn href(&self) -> LocationResult<String> {
        let bar = self.bar.read().map_err(|e| LocationError::Poisoned(e.to_string()))?;
        Ok(bar.current.to_string())
    }
}
