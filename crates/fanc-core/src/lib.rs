//! Core types and utilities for the FanC front end.
//!
//! This crate provides the value types and their cast rules, source spans,
//! and the diagnostic taxonomy shared by every analysis stage.

pub mod error;
pub mod span;
pub mod types;

pub use error::{Error, ErrorKind, Result};
pub use span::Span;
pub use types::{Type, format_type_list};
