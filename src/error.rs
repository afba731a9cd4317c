//! Error types for building and parsing request URLs.
//!
//! Every fallible operation in this crate returns [`Error`]. Parse failures keep
//! the underlying [`url::ParseError`] so callers can see exactly why a string was
//! rejected.

use std::fmt;

/// The URL components a [`Request`](crate::Request) must carry before it can be
/// rendered into a URL.
///
/// Variants are declared in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    /// The URL scheme, e.g. `http`.
    Scheme,
    /// The host, optionally with a `:port` suffix.
    Host,
    /// The request path.
    Path,
}

impl RequiredField {
    /// Returns the field name as it appears on the descriptor.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Scheme => "scheme",
            RequiredField::Host => "host",
            RequiredField::Path => "path",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The main error type for request descriptors.
///
/// # Examples
///
/// ```
/// use requrl::{Error, Request, RequiredField};
///
/// let request: Request = Request::new();
///
/// match request.url() {
///     Err(Error::Validation { field }) => assert_eq!(field, RequiredField::Scheme),
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A URL string could not be parsed, or the descriptor's parts do not form
    /// a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A required URL component is empty.
    ///
    /// Only the first missing field is reported, checked in the order
    /// scheme, host, path.
    #[error("Missing required URL field: {field}")]
    Validation {
        /// The first required field found empty
        field: RequiredField,
    },

    /// Invalid configuration was provided, such as a malformed header name or
    /// value.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl Error {
    /// Returns `true` if this error came from URL parsing.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::InvalidUrl(_))
    }

    /// Returns `true` if this error reports a missing required field.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Returns the missing field for `Validation` errors, `None` otherwise.
    pub fn missing_field(&self) -> Option<RequiredField> {
        match self {
            Error::Validation { field } => Some(*field),
            _ => None,
        }
    }
}

/// A specialized `Result` type for request descriptor operations.
///
/// This is a convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
