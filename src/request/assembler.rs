//! Collects request parameters and routes them to body or headers.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::error::ClientError;
use crate::params::{Param, ParamValidator, ParamValue};

/// The assembled halves of an outgoing request.
///
/// Body-bound parameters land in `body` under their key, scalars as JSON
/// strings and structured values verbatim. Header-bound parameters land in
/// `headers` with their key as the header name.
#[derive(Debug, Clone, Default)]
pub struct AssembledRequest {
    pub body: serde_json::Map<String, serde_json::Value>,
    pub headers: HeaderMap,
}

impl AssembledRequest {
    /// The body as a JSON object value, ready for payload serialization.
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::Value::Object(self.body.clone())
    }
}

/// Accumulates [`Param`]s in insertion order and assembles them.
///
/// Duplicate keys are resolved last-write-wins: a later parameter replaces
/// an earlier one with the same key, and the override is logged at debug
/// level. Callers that consider duplicates an error should check before
/// pushing.
#[derive(Debug, Clone, Default)]
pub struct RequestAssembler {
    params: Vec<Param>,
}

impl RequestAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style.
    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a parameter.
    pub fn push(&mut self, param: Param) {
        self.params.push(param);
    }

    /// Add a parameter after running it through [`ParamValidator`].
    pub fn push_validated(&mut self, param: Param) -> Result<(), ClientError> {
        ParamValidator::validate(&param)?;
        self.params.push(param);
        Ok(())
    }

    /// The parameters collected so far, in insertion order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Route collected parameters into body and headers.
    ///
    /// Fails only when a header-bound value cannot be represented as an
    /// HTTP header value.
    pub fn assemble(self) -> Result<AssembledRequest, ClientError> {
        let mut out = AssembledRequest::default();

        for param in self.params {
            if param.in_body() {
                let previous = out
                    .body
                    .insert(param.key().to_string(), param.value().to_json());
                if previous.is_some() {
                    debug!(key = param.key(), "body parameter overridden, last write wins");
                }
            } else {
                // Keys are fixed lowercase literals, valid header names by
                // construction.
                let name = HeaderName::from_static(param.key());
                let value = match param.value() {
                    ParamValue::Scalar(s) => HeaderValue::from_str(s)?,
                    ParamValue::Structured(v) => {
                        HeaderValue::from_str(&serde_json::to_string(v)?)?
                    }
                };
                if out.headers.insert(name, value).is_some() {
                    debug!(key = param.key(), "header overridden, last write wins");
                }
            }
        }

        Ok(out)
    }
}

impl FromIterator<Param> for RequestAssembler {
    fn from_iter<I: IntoIterator<Item = Param>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}
