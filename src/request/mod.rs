//! Request Assembly Module
//!
//! Consumes [`crate::Param`] values and produces the two halves of an
//! outgoing request: a JSON body object and an HTTP header map.

pub mod assembler;

pub use assembler::{AssembledRequest, RequestAssembler};
