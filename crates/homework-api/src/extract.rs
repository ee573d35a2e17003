//! Request extractors for the homework endpoints.
//!
//! Bodies are read as raw bytes and parsed here rather than through
//! [`axum::Json`], so that a missing `Content-Type`, an empty body, malformed
//! JSON and a non-object document all collapse into the same
//! [`Error::MissingData`] rejection.

use axum::{
  body::Bytes,
  extract::{FromRequestParts, Path},
  http::{StatusCode, request::Parts},
};
use homework_core::Error;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The `{id}` path segment of `/homework/{id}`.
///
/// Only a run of ASCII digits that fits in a `u64` is accepted. Anything else
/// (a sign, a decimal point, overflow) is rejected with a bare 404, as if the
/// route had not matched at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeworkId(pub u64);

impl HomeworkId {
  fn parse(segment: &str) -> Option<Self> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
      return None;
    }
    segment.parse().ok().map(Self)
  }
}

impl<S> FromRequestParts<S> for HomeworkId
where
  S: Send + Sync,
{
  type Rejection = StatusCode;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &S,
  ) -> Result<Self, Self::Rejection> {
    let Path(segment) = Path::<String>::from_request_parts(parts, state)
      .await
      .map_err(|_| StatusCode::NOT_FOUND)?;
    Self::parse(&segment).ok_or(StatusCode::NOT_FOUND)
  }
}

/// Parse `body` as a JSON object and deserialise it into `T`.
pub fn json_object<T: DeserializeOwned>(body: &Bytes) -> Result<T, Error> {
  let value: Value = serde_json::from_slice(body).map_err(|e| {
    tracing::debug!(error = %e, "unparseable request body");
    Error::MissingData
  })?;
  if !value.is_object() {
    tracing::debug!("request body is not a JSON object");
    return Err(Error::MissingData);
  }
  serde_json::from_value(value).map_err(|e| {
    tracing::debug!(error = %e, "request body has mistyped fields");
    Error::MissingData
  })
}
