//! Error type for `homework-store-memory`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// Two initial records share the same id.
  #[error("duplicate homework id: {0}")]
  DuplicateId(u64),

  /// Every `u64` id has been handed out; no further record can be created.
  #[error("homework id space exhausted")]
  IdSpaceExhausted,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
