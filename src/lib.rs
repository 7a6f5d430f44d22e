//! kalturaclient
//!
//! Typed request-parameter model for the Kaltura OTT API.
//!
//! Each recognized request option (session token, language, currency, user
//! id, response profile, request-correlation id) is an immutable [`Param`]
//! carrying a fixed key, a caller-supplied value, and a placement that says
//! whether it travels in the request body or as a transport header. The
//! [`request::RequestAssembler`] collects params into a JSON body and a
//! header map for whatever transport layer executes the request.
//!
//! This crate builds requests; it never sends them. Execution, retries, and
//! response parsing belong to the consuming transport layer.
#![deny(unsafe_code)]

pub mod error;
pub mod params;
pub mod request;

pub use error::ClientError;
pub use params::{Param, ParamValue, Placement};
pub use request::{AssembledRequest, RequestAssembler};
