//! Core error types.

use thiserror::Error;

/// Errors produced while building or validating request parameters.
///
/// Constructing a [`crate::Param`] never fails; errors arise only from the
/// optional validation layer, from serializing typed response profiles, and
/// from turning header-bound values into wire headers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// A parameter value failed a format check in the validation layer.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// JSON serialization of a structured value failed.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// A value could not be represented in the requested position, e.g. a
    /// header-bound value that is not a legal HTTP header value.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
