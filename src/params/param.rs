//! The `Param` value object and its constructors.
//!
//! One constructor exists per recognized request option. The key and the
//! placement are fixed by the constructor; only the value varies per call.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

pub(crate) const KS: &str = "ks";
pub(crate) const LANGUAGE: &str = "language";
pub(crate) const REQUEST_CORRELATION_ID: &str = "x-kaltura-session-id";
pub(crate) const CURRENCY: &str = "currency";
pub(crate) const USER_ID: &str = "userId";
pub(crate) const RESPONSE_PROFILE: &str = "responseProfile";

/// Where a parameter travels in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Serialized into the request payload under the parameter's key.
    Body,
    /// Injected as a transport header, key as header name.
    Header,
}

/// A parameter value: either a plain string or an arbitrary JSON structure.
///
/// The five scalar options carry `Scalar`; the response profile carries
/// `Structured` so callers can describe arbitrary response shaping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(String),
    Structured(serde_json::Value),
}

impl ParamValue {
    /// The scalar string, if this value is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Structured(_) => None,
        }
    }

    /// The value as JSON, scalars becoming JSON strings.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Scalar(s) => serde_json::Value::String(s.clone()),
            Self::Structured(v) => v.clone(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Structured(value)
    }
}

/// An immutable named request option with a destination placement.
///
/// Construction is pure and infallible; no format checks happen here. Equal
/// inputs to the same constructor yield equal, independent instances.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    key: &'static str,
    value: ParamValue,
    placement: Placement,
}

impl Param {
    fn scalar(key: &'static str, placement: Placement, value: impl Into<String>) -> Self {
        Self {
            key,
            value: ParamValue::Scalar(value.into()),
            placement,
        }
    }

    /// Session token (`ks`), body-bound. The token is opaque here; its
    /// format is not checked.
    pub fn session_token(value: impl Into<String>) -> Self {
        Self::scalar(KS, Placement::Body, value)
    }

    /// Language code (`language`), body-bound.
    pub fn language(value: impl Into<String>) -> Self {
        Self::scalar(LANGUAGE, Placement::Body, value)
    }

    /// Request-correlation id (`x-kaltura-session-id`), header-bound.
    pub fn request_correlation_id(value: impl Into<String>) -> Self {
        Self::scalar(REQUEST_CORRELATION_ID, Placement::Header, value)
    }

    /// A fresh UUIDv4 correlation id, for callers that do not bring their
    /// own.
    pub fn generated_request_correlation_id() -> Self {
        Self::request_correlation_id(uuid::Uuid::new_v4().to_string())
    }

    /// Currency code (`currency`), body-bound.
    pub fn currency(value: impl Into<String>) -> Self {
        Self::scalar(CURRENCY, Placement::Body, value)
    }

    /// User identifier (`userId`), body-bound.
    pub fn user_id(value: impl Into<String>) -> Self {
        Self::scalar(USER_ID, Placement::Body, value)
    }

    /// Response-shaping directive (`responseProfile`), body-bound. The
    /// structured value is stored unmodified.
    pub fn response_profile(value: serde_json::Value) -> Self {
        Self {
            key: RESPONSE_PROFILE,
            value: ParamValue::Structured(value),
            placement: Placement::Body,
        }
    }

    /// Build a response profile from any serializable description.
    ///
    /// The only fallible constructor; serialization failures surface as
    /// [`ClientError::JsonError`].
    pub fn response_profile_for<T: Serialize>(profile: &T) -> Result<Self, ClientError> {
        Ok(Self::response_profile(serde_json::to_value(profile)?))
    }

    /// The wire key, fixed by the constructor.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// The caller-supplied value.
    pub fn value(&self) -> &ParamValue {
        &self.value
    }

    /// Where this parameter travels.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// `true` when this parameter belongs in the request body rather than a
    /// transport header.
    pub fn in_body(&self) -> bool {
        self.placement == Placement::Body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn session_token_is_body_bound_ks() {
        let param = Param::session_token("abc123");
        assert_eq!(param.key(), "ks");
        assert_eq!(param.value().as_str(), Some("abc123"));
        assert!(param.in_body());
    }

    #[test]
    fn language_is_body_bound() {
        let param = Param::language("en");
        assert_eq!(param.key(), "language");
        assert_eq!(param.value().as_str(), Some("en"));
        assert_eq!(param.placement(), Placement::Body);
    }

    #[test]
    fn correlation_id_is_header_bound() {
        let param = Param::request_correlation_id("req-42");
        assert_eq!(param.key(), "x-kaltura-session-id");
        assert_eq!(param.value().as_str(), Some("req-42"));
        assert_eq!(param.placement(), Placement::Header);
        assert!(!param.in_body());
    }

    #[test]
    fn generated_correlation_id_is_a_uuid() {
        let param = Param::generated_request_correlation_id();
        assert_eq!(param.key(), "x-kaltura-session-id");
        assert!(!param.in_body());
        let id = param.value().as_str().expect("scalar");
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }

    #[test]
    fn currency_and_user_id_are_body_bound() {
        let currency = Param::currency("USD");
        assert_eq!(currency.key(), "currency");
        assert_eq!(currency.value().as_str(), Some("USD"));
        assert!(currency.in_body());

        let user = Param::user_id("u-9");
        assert_eq!(user.key(), "userId");
        assert_eq!(user.value().as_str(), Some("u-9"));
        assert!(user.in_body());
    }

    #[test]
    fn response_profile_preserves_structure() {
        let profile = json!({"type": "include", "fields": ["id", "name"]});
        let param = Param::response_profile(profile.clone());
        assert_eq!(param.key(), "responseProfile");
        assert!(param.in_body());
        assert_eq!(param.value(), &ParamValue::Structured(profile));
    }

    #[test]
    fn response_profile_for_serializes_typed_descriptions() {
        #[derive(Serialize)]
        struct IncludeProfile {
            r#type: &'static str,
            fields: Vec<&'static str>,
        }

        let param = Param::response_profile_for(&IncludeProfile {
            r#type: "include",
            fields: vec!["id", "name"],
        })
        .expect("serializable profile");
        assert_eq!(
            param.value().to_json(),
            json!({"type": "include", "fields": ["id", "name"]})
        );
    }

    #[test]
    fn equal_inputs_give_equal_independent_params() {
        let a = Param::session_token("tok");
        let b = Param::session_token("tok");
        assert_eq!(a, b);

        // No aliasing: dropping one leaves the other intact.
        drop(a);
        assert_eq!(b.value().as_str(), Some("tok"));
    }

    #[test]
    fn empty_values_are_accepted_unchecked() {
        let param = Param::session_token("");
        assert_eq!(param.value().as_str(), Some(""));
    }

    #[test]
    fn param_value_json_views() {
        assert_eq!(
            ParamValue::Scalar("en".into()).to_json(),
            json!("en")
        );
        let structured = ParamValue::Structured(json!({"a": 1}));
        assert_eq!(structured.to_json(), json!({"a": 1}));
        assert_eq!(structured.as_str(), None);
    }
}
