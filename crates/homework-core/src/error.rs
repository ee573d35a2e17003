//! Error types for `homework-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// The payload was absent, unparseable, or lacked a required field.
  #[error("Missing data")]
  MissingData,

  #[error("Homework not found")]
  NotFound(u64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
