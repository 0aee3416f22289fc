//! Core types and trait definitions for the AWCH submissions backend.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod store;
pub mod submission;

pub use error::{Error, ErrorKind, Result, StoreError};
