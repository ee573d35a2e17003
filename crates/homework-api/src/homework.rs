//! Handlers for `/homework` endpoints.
//!
//! | Method   | Path             | Notes |
//! |----------|------------------|-------|
//! | `GET`    | `/homework`      | Full collection in insertion order |
//! | `POST`   | `/homework`      | Body: [`CreateBody`]; returns 201 + stored record |
//! | `PUT`    | `/homework/{id}` | Body: [`UpdateBody`]; `{}` is a no-op |
//! | `DELETE` | `/homework/{id}` | Returns a confirmation message |

use std::sync::Arc;

use axum::{
  Json,
  body::Bytes,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use homework_core::{
  Error,
  homework::{HomeworkPatch, HomeworkRecord, NewHomework},
  store::HomeworkStore,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
  error::ApiError,
  extract::{HomeworkId, json_object},
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /homework`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<HomeworkRecord>>, ApiError>
where
  S: HomeworkStore,
{
  let records = store
    .list()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(records))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /homework`.
///
/// Every field is optional at the parsing stage; the required ones are checked
/// when converting into [`NewHomework`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBody {
  pub title:     Option<String>,
  pub subject:   Option<String>,
  pub due_date:  Option<String>,
  pub completed: Option<bool>,
}

impl TryFrom<CreateBody> for NewHomework {
  type Error = Error;

  fn try_from(b: CreateBody) -> Result<Self, Error> {
    NewHomework::new(b.title, b.subject, b.due_date, b.completed)
  }
}

/// `POST /homework` — returns 201 + the stored [`HomeworkRecord`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: HomeworkStore,
{
  let body: CreateBody = json_object(&body)?;
  let input = NewHomework::try_from(body)?;

  let record = store
    .create(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(record)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `PUT /homework/{id}`. Absent and `null` fields are
/// left untouched.
pub type UpdateBody = HomeworkPatch;

/// `PUT /homework/{id}`
///
/// The body is validated before the id is looked up, so an unparseable body
/// is a 400 even when the id is unknown.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  HomeworkId(id): HomeworkId,
  body: Bytes,
) -> Result<Json<HomeworkRecord>, ApiError>
where
  S: HomeworkStore,
{
  let patch: UpdateBody = json_object(&body)?;

  let record = store
    .update(id, patch)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or(Error::NotFound(id))?;
  Ok(Json(record))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /homework/{id}`
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  HomeworkId(id): HomeworkId,
) -> Result<impl IntoResponse, ApiError>
where
  S: HomeworkStore,
{
  let removed = store
    .delete(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if !removed {
    return Err(Error::NotFound(id).into());
  }
  Ok(Json(json!({ "message": "Homework deleted successfully" })))
}
