//! Location binding for hashlink.
//!
//! This crate connects the pure channel store to an address bar. It provides
//! the [`Location`] trait the environment implements, an in-memory
//! implementation, the registry of hash-change listeners, and the API the
//! viewer's UI calls to share and restore state.
//!
//! # Architecture
//!
//! - The free functions ([`add_hash_params`], [`get_hash_params`], ...) take
//!   an explicit location. They are what tests drive directly.
//! - [`HashState`] owns one location and a [`HashListeners`] registry. It is
//!   created once per tab or session and fires listeners after each write
//!   that changes the hash.
//!
//! # Modules
//!
//! - [`traits`] -- The [`Location`] trait
//! - [`memory`] -- [`InMemoryLocation`], an address bar backed by `url`
//! - [`params`] -- Channel operations against an explicit location
//! - [`listeners`] -- [`HashListeners`] and dispatch reporting
//! - [`state`] -- The [`HashState`] facade
//! - [`config`] -- [`HashStateConfig`]
//! - [`error`] -- Error types

pub mod config;
pub mod error;
pub mod listeners;
pub mod memory;
pub mod params;
pub mod state;
pub mod traits;

pub use config::HashStateConfig;
pub use error::{LocationError, LocationResult};
pub use listeners::{DispatchReport, HashListener, HashListeners, ListenerFailure};
pub use memory::InMemoryLocation;
pub use params::{
    add_hash_params, get_hash_params, has_hash_params, remove_hash_params, set_hash_params,
};
pub use state::HashState;
pub use traits::Location;

// Re-export the codec surface callers need alongside the location API.
pub use hashlink_codec::{encode_params, object_params, ParamMapping, ParamValue};
