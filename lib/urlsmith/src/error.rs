//! Error types for urlsmith.

use derive_more::{Display, Error, From};

/// Main error type for client operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Parameter serialization error from the engine.
    #[display("serialization error: {_0}")]
    Serialize(urlsmith_core::Error),

    /// JSON body serialization error.
    #[display("JSON serialization error: {_0}")]
    JsonSerialization(serde_json::Error),

    /// Network/connection error reported by the transport.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}
