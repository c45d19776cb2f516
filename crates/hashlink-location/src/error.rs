//! Error types for location operations.

use hashlink_channels::ChannelError;
use thiserror::Error;

/// Errors that can occur while reading or writing a location.
#[derive(Debug, Error)]
pub enum LocationError {
    /// A caller passed a name or parameter the wire format cannot carry.
    #[error(transparent)]
    Channel(#[from] ChannelError),

    /// The address could not be parsed as a URL.
    #[error("invalid url: {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The location's interior state was poisoned by a panicking writer.
    #[error("location state poisoned: {0}")]
    Poisoned(String),

    /// The configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for location operations.
pub type LocationResult<T> = std::result::Result<T, LocationError>;
