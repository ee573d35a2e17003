//! The `HomeworkStore` trait.
//!
//! Implemented by storage backends (e.g. `homework-store-memory`). The API
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::homework::{HomeworkPatch, HomeworkRecord, NewHomework};

/// Abstraction over a homework store backend.
///
/// Each call is applied atomically with respect to every other call: ids are
/// unique, allocated exactly once per successful create, and never reused.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait HomeworkStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All records, in insertion order.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<HomeworkRecord>, Self::Error>> + Send + '_;

  /// Retrieve a record by id. Returns `None` if not found.
  fn get(
    &self,
    id: u64,
  ) -> impl Future<Output = Result<Option<HomeworkRecord>, Self::Error>> + Send + '_;

  /// Allocate the next id, append the record and return it.
  fn create(
    &self,
    input: NewHomework,
  ) -> impl Future<Output = Result<HomeworkRecord, Self::Error>> + Send + '_;

  /// Apply `patch` in place. Returns `None` if no record has this id.
  fn update(
    &self,
    id: u64,
    patch: HomeworkPatch,
  ) -> impl Future<Output = Result<Option<HomeworkRecord>, Self::Error>> + Send + '_;

  /// Remove the record with this id. Returns `false` if it did not exist.
  fn delete(
    &self,
    id: u64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
