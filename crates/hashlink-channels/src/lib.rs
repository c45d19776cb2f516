//! Channel store for hashlink.
//!
//! A URL fragment carries several independent parameter sets, called
//! channels, each owned by a different part of the viewer (camera, selection,
//! panel layout). This crate reads and rewrites one channel of a hash string
//! while leaving every other channel untouched.
//!
//! All functions here are pure: they take the hash (the fragment without the
//! leading `#`) as a string and return a new string. Binding to a live
//! address bar lives in `hashlink-location`.
//!
//! # Modules
//!
//! - [`entry`] -- The [`ChannelEntry`] type and hash splitting
//! - [`store`] -- Locate, merge, replace and remove operations
//! - [`names`] -- Contract checks for channel names and parameters
//! - [`fragment`] -- Helpers operating on full URL strings
//! - [`error`] -- Error types for contract violations

pub mod entry;
pub mod error;
pub mod fragment;
pub mod names;
pub mod store;

pub use entry::{channel_name, list_channels, ChannelEntry};
pub use error::{ChannelError, ChannelResult};
pub use fragment::{all_hash_params, hash_params_from_url};
pub use names::{validate_channel_name, validate_param_key, validate_params};
pub use store::{locate_channel, merge_channel, remove_channel_keys, replace_channel};
