//! Type conversions for `ClientError`
//!
//! `From` implementations for converting common error types into
//! `ClientError`.

use super::types::ClientError;

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for ClientError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::ConfigurationError(err.to_string())
    }
}
