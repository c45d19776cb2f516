//! Channel entries: the `name:blob` pairs a hash is made of.

use std::fmt;

use hashlink_codec::{object_params, ParamMapping, ENTRY_SEP, NAME_SEP};
use serde::Serialize;

/// One `name:blob` pair within a hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChannelEntry {
    /// Channel name (e.g. "p" for the selection path, "c" for the camera).
    pub name: String,
    /// Everything after the first `:`. May be empty.
    pub blob: String,
}

impl ChannelEntry {
    pub fn new(name: impl Into<String>, blob: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blob: blob.into(),
        }
    }

    /// Split a raw entry at its first `:`. An entry without one is treated
    /// as a name with an empty blob.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(NAME_SEP) {
            Some((name, blob)) => Self::new(name, blob),
            None => Self::new(raw, ""),
        }
    }

    /// Decode this entry's parameters.
    pub fn params(&self) -> ParamMapping {
        object_params(&self.to_string())
    }
}

impl fmt::Display for ChannelEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{NAME_SEP}{}", self.name, self.blob)
    }
}

/// The channel name of a raw entry: the text up to its first `:`.
pub fn channel_name(raw: &str) -> &str {
    raw.split(NAME_SEP).next().unwrap_or(raw)
}

/// Split a hash into its entries, in order. Empty entries are skipped.
pub fn list_channels(hash: &str) -> Vec<ChannelEntry> {
    hash.split(ENTRY_SEP)
        .filter(|raw| !raw.is_empty())
        .map(ChannelEntry::parse)
        .collect()
}
