//! Helpers that read channels out of a full URL string.

use crate::store::locate_channel;

const FRAGMENT_MARK: char = '#';

/// The hash part of `url`: the text between the first and second `#`.
///
/// Returns `None` when the URL has no `#`.
pub fn all_hash_params(url: &str) -> Option<&str> {
    url.split(FRAGMENT_MARK).nth(1)
}

/// Find the entry for channel `name` in the hash of `url`.
pub fn hash_params_from_url<'a>(url: &'a str, name: &str) -> Option<&'a str> {
    let hash = all_hash_params(url).filter(|hash| !hash.is_empty())?;
    locate_channel(hash, name)
}
