//! Error types for channel contract violations.

use thiserror::Error;

/// Errors reported when a caller passes an argument the wire format cannot
/// carry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChannelError {
    /// The channel name is empty or contains a reserved character.
    #[error("invalid channel name: {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// A parameter key is empty or contains a reserved character.
    #[error("invalid parameter key: {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    /// A parameter value contains a reserved character.
    #[error("invalid value for parameter {key:?}: {value:?}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Convenience type alias for channel operations.
pub type ChannelResult<T> = std::result::Result<T, ChannelError>;
