//! SQLite backend for the AWCH submission store.
//!
//! Each submission is kept as a JSON document keyed by its id. Access goes
//! through [`tokio_rusqlite`] so all database work runs on a dedicated thread
//! without blocking the async runtime.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
