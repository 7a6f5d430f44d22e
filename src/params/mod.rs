//! Request Parameter Module
//!
//! This module defines the typed parameter model used to build outgoing API
//! requests and the format checks applied to it.
//!
//! ## Module Organization
//!
//! - **`param`** - The [`Param`] value object and its per-option constructors
//! - **`validator`** - Opt-in format validation, kept apart from construction
//!
//! Construction never validates: a [`Param`] stores whatever value the
//! caller supplies, and rejecting malformed values is the business of
//! [`validator::ParamValidator`] or of the remote service.

pub mod param;
pub mod validator;

pub use param::{Param, ParamValue, Placement};
pub use validator::ParamValidator;
