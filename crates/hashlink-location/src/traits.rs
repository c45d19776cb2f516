//! The [`Location`] trait binding hash operations to an address bar.
//!
//! A browser tab, an embedded web view or a test double each implement this
//! trait. These three writes are the only points where hashlink touches the
//! environment; everything else works on plain strings.

use crate::error::LocationResult;

/// An address bar holding a URL fragment.
///
/// Implementations use interior mutability so a location can be shared with
/// the UI handlers that read and write it. A `hash()` → compute →
/// `set_hash()` sequence is not atomic: callers must not interleave two of
/// them, or the later write will overwrite the earlier one.
pub trait Location: Send + Sync {
    /// The current fragment without the leading `#`.
    ///
    /// Returns an empty string when the URL has no fragment.
    fn hash(&self) -> LocationResult<String>;

    /// Replace the fragment. `hash` excludes the leading `#`.
    ///
    /// Returns `false` when the fragment, as the address bar stores it, is
    /// unchanged and nothing was written.
    fn set_hash(&self, hash: &str) -> LocationResult<bool>;

    /// Drop the fragment entirely, leaving only path and query, and record
    /// the result as a new history entry. Returns `false` when the URL
    /// already has no fragment.
    fn reset_to_path(&self) -> LocationResult<bool>;

    /// The full URL as currently shown.
    fn href(&self) -> LocationResult<String>;
}
