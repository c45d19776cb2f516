//! Channel operations against an explicit [`Location`].
//!
//! Each function reads the location's hash, runs the matching pure channel
//! operation and writes the result back. A write that leaves the hash empty
//! resets the address bar to its path and query instead of leaving a bare
//! `#`.
//!
//! [`HashState`](crate::HashState) goes through the same `pub(crate)`
//! helpers, passing its own reset setting and using the returned flag to
//! decide whether to notify listeners.

use hashlink_channels::{
    locate_channel, merge_channel, remove_channel_keys, replace_channel, validate_channel_name,
    validate_params,
};
use hashlink_codec::ParamMapping;
use tracing::debug;

use crate::error::LocationResult;
use crate::traits::Location;

/// The raw entry for channel `name` (e.g. `"p:x=0,y=0"`), if present.
pub fn get_hash_params<L: Location + ?Sized>(
    location: &L,
    name: &str,
) -> LocationResult<Option<String>> {
    let hash = location.hash()?;
    Ok(locate_channel(&hash, name).map(str::to_string))
}

/// Whether channel `name` is present in the hash.
pub fn has_hash_params<L: Location + ?Sized>(location: &L, name: &str) -> LocationResult<bool> {
    Ok(get_hash_params(location, name)?.is_some())
}

/// Merge `params` into channel `name`, keeping its other keys.
pub fn add_hash_params<L: Location + ?Sized>(
    location: &L,
    name: &str,
    params: &ParamMapping,
    include_names: bool,
) -> LocationResult<()> {
    merge(location, name, params, include_names, true)?;
    Ok(())
}

/// Remove `keys` from channel `name`, or the whole channel when `keys` is
/// empty.
pub fn remove_hash_params<L: Location + ?Sized, S: AsRef<str>>(
    location: &L,
    name: &str,
    keys: &[S],
) -> LocationResult<()> {
    remove(location, name, keys, true)?;
    Ok(())
}

/// Replace channel `name` with exactly `params`: the channel is removed and
/// then added back, so unlisted keys are dropped.
pub fn set_hash_params<L: Location + ?Sized>(
    location: &L,
    name: &str,
    params: &ParamMapping,
    include_names: bool,
) -> LocationResult<()> {
    replace(location, name, params, include_names, true)?;
    Ok(())
}

pub(crate) fn merge<L: Location + ?Sized>(
    location: &L,
    name: &str,
    params: &ParamMapping,
    include_names: bool,
    reset_on_empty: bool,
) -> LocationResult<bool> {
    validate_channel_name(name)?;
    validate_params(params)?;
    rewrite(location, name, reset_on_empty, |hash| {
        merge_channel(hash, name, params, include_names)
    })
}

pub(crate) fn replace<L: Location + ?Sized>(
    location: &L,
    name: &str,
    params: &ParamMapping,
    include_names: bool,
    reset_on_empty: bool,
) -> LocationResult<bool> {
    validate_channel_name(name)?;
    validate_params(params)?;
    rewrite(location, name, reset_on_empty, |hash| {
        replace_channel(hash, name, params, include_names)
    })
}

pub(crate) fn remove<L: Location + ?Sized, S: AsRef<str>>(
    location: &L,
    name: &str,
    keys: &[S],
    reset_on_empty: bool,
) -> LocationResult<bool> {
    validate_channel_name(name)?;
    rewrite(location, name, reset_on_empty, |hash| remove_channel_keys(hash, name, keys))
}

/// Read the hash, apply `op` and write the result back. Returns whether the
/// address bar changed.
fn rewrite<L: Location + ?Sized>(
    location: &L,
    name: &str,
    reset_on_empty: bool,
    op: impl FnOnce(&str) -> String,
) -> LocationResult<bool> {
    let hash = location.hash()?;
    let updated = op(&hash);
    debug!(channel = name, from = %hash, to = %updated, "rewriting hash");
    write_hash(location, &updated, reset_on_empty)
}

/// Write `hash` to `location`. An empty `hash` with `reset_on_empty` set
/// drops the fragment in a single navigation.
fn write_hash<L: Location + ?Sized>(
    location: &L,
    hash: &str,
    reset_on_empty: bool,
) -> LocationResult<bool> {
    if hash.is_empty() && reset_on_empty {
        location.reset_to_path()
    } else {
        location.set_hash(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LocationError;
    use crate::memory::InMemoryLocation;
    use hashlink_channels::ChannelError;

    const BASE: &str = "https://viewer.example/share/v/p/index.ifc";

    fn location(hash: &str) -> InMemoryLocation {
        InMemoryLocation::new(&format!("{BASE}#{hash}")).unwrap()
    }

    fn params<const N: usize>(pairs: [(&str, &str); N]) -> ParamMapping {
        pairs.into_iter().collect()
    }

    #[test]
    fn get_and_has() {
        let loc = location("p:x=1,y=2;v:cam=0");
        assert_eq!(get_hash_params(&loc, "p").unwrap().as_deref(), Some("p:x=1,y=2"));
        assert!(has_hash_params(&loc, "v").unwrap());
        assert!(!has_hash_params(&loc, "c").unwrap());
    }

    #[test]
    fn add_to_empty_location() {
        let loc = InMemoryLocation::new(BASE).unwrap();
        let mut camera = ParamMapping::new();
        camera.insert("x", 10);
        camera.insert("y", 20.5);
        add_hash_params(&loc, "c", &camera, false).unwrap();
        assert_eq!(loc.hash().unwrap(), "c:10,20.5");
    }

    #[test]
    fn add_merges() {
        let loc = location("p:x=1,y=2");
        add_hash_params(&loc, "p", &params([("y", "5")]), true).unwrap();
        assert_eq!(loc.hash().unwrap(), "p:x=1,y=5");
    }

    #[test]
    fn set_replaces() {
        let loc = location("p:x=1,y=2");
        set_hash_params(&loc, "p", &params([("x", "3")]), true).unwrap();
        assert_eq!(loc.hash().unwrap(), "p:x=3");
    }

    #[test]
    fn remove_last_channel_resets_to_path() {
        let loc = location("p:x=1");
        remove_hash_params(&loc, "p", &[] as &[&str]).unwrap();
        assert_eq!(loc.hash().unwrap(), "");
        assert_eq!(loc.href().unwrap(), BASE);
        assert_eq!(
            loc.history().unwrap(),
            vec![format!("{BASE}#p:x=1"), BASE.to_string()]
        );
    }

    #[test]
    fn removing_from_clean_url_adds_no_history() {
        let loc = InMemoryLocation::new(BASE).unwrap();
        remove_hash_params(&loc, "p", &[] as &[&str]).unwrap();
        remove_hash_params(&loc, "c", &["x"]).unwrap();
        assert_eq!(loc.history().unwrap(), vec![BASE.to_string()]);
    }

    #[test]
    fn rewrite_reports_change() {
        let loc = location("p:x=1");
        let keep = params([("x", "1")]);
        assert!(!merge(&loc, "p", &keep, true, true).unwrap());
        assert!(replace(&loc, "p", &params([("y", "2")]), true, true).unwrap());
        assert!(remove(&loc, "p", &[] as &[&str], true).unwrap());
        assert!(!remove(&loc, "p", &[] as &[&str], true).unwrap());
    }

    #[test]
    fn rejects_reserved_channel_name() {
        let loc = location("p:x=1");
        let err = add_hash_params(&loc, "a;b", &params([("x", "1")]), true).unwrap_err();
        assert!(matches!(err, LocationError::Channel(ChannelError::InvalidName { .. })));
        assert_eq!(loc.hash().unwrap(), "p:x=1");
    }

    #[test]
    fn rejects_reserved_value() {
        let loc = location("p:x=1");
        let err = set_hash_params(&loc, "p", &params([("x", "1;2")]), true).unwrap_err();
        assert!(matches!(err, LocationError::Channel(ChannelError::InvalidValue { .. })));
        assert_eq!(loc.hash().unwrap(), "p:x=1");
    }

    #[test]
    fn works_through_trait_object() {
        let loc = location("p:x=1");
        let dyn_loc: &dyn Location = &loc;
        add_hash_params(dyn_loc, "v", &params([("cam", "2")]), true).unwrap();
        assert_eq!(get_hash_params(dyn_loc, "v").unwrap().as_deref(), Some("v:cam=2"));
    }
}
