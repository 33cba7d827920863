//! Error types for urlsmith-core.

use derive_more::{Display, Error};

/// Main error type for parameter serialization.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// A parameter value nests arrays/objects more than one level deep.
    ///
    /// The engine never silently mis-serializes such values; supply a
    /// custom query serializer to handle them.
    #[display("unsupported value for `{name}`: deeply-nested arrays/objects need a custom query serializer")]
    UnsupportedValue {
        /// Name or JSON path of the offending parameter.
        name: String,
    },

    /// An unknown parameter style name was supplied.
    ///
    /// The style name space is closed; a typo must not produce a
    /// plausible-looking but wrong URL.
    #[display("unknown parameter style `{_0}`")]
    InvalidStyle(#[error(not(source))] String),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an [`Error::UnsupportedValue`] for the given parameter name.
    #[must_use]
    pub fn unsupported_value(name: impl Into<String>) -> Self {
        Self::UnsupportedValue { name: name.into() }
    }

    /// Create an [`Error::InvalidStyle`] for the given style name.
    #[must_use]
    pub fn invalid_style(style: impl Into<String>) -> Self {
        Self::InvalidStyle(style.into())
    }

    /// Returns `true` if this is an unsupported-value error.
    #[must_use]
    pub const fn is_unsupported_value(&self) -> bool {
        matches!(self, Self::UnsupportedValue { .. })
    }

    /// Returns `true` if this is an invalid-style error.
    #[must_use]
    pub const fn is_invalid_style(&self) -> bool {
        matches!(self, Self::InvalidStyle(_))
    }
}
