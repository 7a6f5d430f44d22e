//! Format validation for request parameters.
//!
//! Constructors accept values unchecked; callers that want client-side
//! rejection of malformed values run params through [`ParamValidator`]
//! before assembly. The checks are deliberately loose — the remote service
//! remains the authority on value semantics.

use crate::error::ClientError;
use crate::params::param::{self, Param, ParamValue};

/// Stateless format checker for [`Param`] values.
pub struct ParamValidator;

impl ParamValidator {
    /// Validate a single parameter's value against its key's expected
    /// format.
    pub fn validate(param: &Param) -> Result<(), ClientError> {
        match (param.key(), param.value()) {
            (param::KS, ParamValue::Scalar(v)) => Self::require_non_empty("ks", v),
            (param::USER_ID, ParamValue::Scalar(v)) => Self::require_non_empty("userId", v),
            (param::REQUEST_CORRELATION_ID, ParamValue::Scalar(v)) => {
                Self::require_non_empty("x-kaltura-session-id", v)
            }
            (param::LANGUAGE, ParamValue::Scalar(v)) => Self::validate_language(v),
            (param::CURRENCY, ParamValue::Scalar(v)) => Self::validate_currency(v),
            (param::RESPONSE_PROFILE, ParamValue::Structured(v)) => {
                if v.is_object() {
                    Ok(())
                } else {
                    Err(ClientError::InvalidParameter(
                        "responseProfile must be a JSON object".to_string(),
                    ))
                }
            }
            // Unknown key/value pairings cannot be produced by the fixed
            // constructors; accept them rather than guess at a format.
            _ => Ok(()),
        }
    }

    /// Validate every parameter in a batch, failing on the first offender.
    pub fn validate_all<'a>(params: impl IntoIterator<Item = &'a Param>) -> Result<(), ClientError> {
        for param in params {
            Self::validate(param)?;
        }
        Ok(())
    }

    fn require_non_empty(key: &str, value: &str) -> Result<(), ClientError> {
        if value.is_empty() {
            return Err(ClientError::InvalidParameter(format!(
                "{key} cannot be empty"
            )));
        }
        Ok(())
    }

    // Loose BCP-47 shape: 2-8 ASCII letters or hyphen-separated subtags.
    fn validate_language(value: &str) -> Result<(), ClientError> {
        let shape_ok = (2..=8).contains(&value.len())
            && value.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
            && !value.starts_with('-')
            && !value.ends_with('-');
        if !shape_ok {
            return Err(ClientError::InvalidParameter(format!(
                "language '{value}' is not a valid language code"
            )));
        }
        Ok(())
    }

    fn validate_currency(value: &str) -> Result<(), ClientError> {
        if value.len() != 3 || !value.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ClientError::InvalidParameter(format!(
                "currency '{value}' is not a 3-letter ISO currency code"
            )));
        }
        Ok(())
    }
}
