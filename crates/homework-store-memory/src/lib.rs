//! In-memory backend for the homework store.
//!
//! Records live in a `Vec` behind a single [`tokio::sync::Mutex`] together
//! with the id counter, so every operation sees a consistent collection.
//! Nothing is persisted; the store lives as long as the process.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{MemoryStore, seed_records};
