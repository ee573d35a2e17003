//! Core types and trait definitions for the homework manager.
//!
//! This crate is free of HTTP and runtime dependencies. The store backend and
//! the API layer both depend on it.

pub mod error;
pub mod homework;
pub mod store;

pub use error::{Error, Result};
