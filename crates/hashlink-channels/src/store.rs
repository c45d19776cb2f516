//! Channel store operations over a plain hash string.
//!
//! Each function reads one channel of the hash and returns the rewritten
//! hash. Entries belonging to other channels are carried over byte for byte
//! and keep their relative order.

use hashlink_codec::{encode_params, object_params, ParamMapping, ENTRY_SEP, NAME_SEP};
use tracing::debug;

use crate::entry::channel_name;

fn prefix(name: &str) -> String {
    format!("{name}{NAME_SEP}")
}

/// Find the first entry of `hash` belonging to channel `name`.
///
/// Returns the raw entry (e.g. `"p:x=1,y=2"`), or `None` if the channel is
/// absent. An empty hash has no entries.
pub fn locate_channel<'a>(hash: &'a str, name: &str) -> Option<&'a str> {
    let prefix = prefix(name);
    hash.split(ENTRY_SEP).find(|entry| entry.starts_with(&prefix))
}

/// Merge `params` into channel `name`.
///
/// The channel's current parameters are decoded, `params` is laid over them
/// (new values win, other keys survive) and the result is re-encoded. The
/// entry is rewritten in place; a missing channel is appended at the end.
///
/// While rebuilding, empty entries are dropped and only the first entry of
/// each name is kept, so the result never holds two entries for one channel.
pub fn merge_channel(hash: &str, name: &str, params: &ParamMapping, include_names: bool) -> String {
    let mut merged = locate_channel(hash, name)
        .map(object_params)
        .unwrap_or_default();
    merged.overlay(params);
    let target = format!("{}{}", prefix(name), encode_params(&merged, include_names));

    let mut seen: Vec<&str> = Vec::new();
    let mut entries: Vec<&str> = Vec::new();
    let mut written = false;
    for entry in hash.split(ENTRY_SEP).filter(|entry| !entry.is_empty()) {
        let entry_name = channel_name(entry);
        if seen.contains(&entry_name) {
            continue;
        }
        seen.push(entry_name);
        if entry_name == name {
            entries.push(&target);
            written = true;
        } else {
            entries.push(entry);
        }
    }
    if !written {
        entries.push(&target);
    }

    let rewritten = entries.join(";");
    debug!(channel = name, hash = %rewritten, "channel merged");
    rewritten
}

/// Replace channel `name` with exactly `params`.
///
/// Equivalent to removing the whole channel and merging `params` back in, so
/// keys missing from `params` are dropped and the channel moves to the end
/// of the hash.
pub fn replace_channel(hash: &str, name: &str, params: &ParamMapping, include_names: bool) -> String {
    let cleared = remove_channel_keys::<&str>(hash, name, &[]);
    merge_channel(&cleared, name, params, include_names)
}

/// Remove keys from channel `name`.
///
/// With no `keys`, every entry for the channel is dropped. Otherwise the
/// listed keys are deleted and the entry is rewritten with named encoding;
/// a channel left without parameters stays as `name:`. All other entries,
/// empty ones included, pass through untouched.
pub fn remove_channel_keys<S: AsRef<str>>(hash: &str, name: &str, keys: &[S]) -> String {
    let prefix = prefix(name);
    let entries: Vec<String> = hash
        .split(ENTRY_SEP)
        .filter_map(|entry| {
            if !entry.starts_with(&prefix) {
                return Some(entry.to_string());
            }
            if keys.is_empty() {
                return None;
            }
            let mut params = object_params(entry);
            for key in keys {
                params.remove(key.as_ref());
            }
            Some(format!("{prefix}{}", encode_params(&params, true)))
        })
        .collect();

    let rewritten = entries.join(";");
    debug!(channel = name, keys = keys.len(), hash = %rewritten, "channel keys removed");
    rewritten
}
