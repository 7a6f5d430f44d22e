//! Error handling types for kalturaclient.
//!
//! This module is intentionally dependency-light and shared across the
//! crate's components.

mod conversions;
pub mod types;

pub use types::*;
