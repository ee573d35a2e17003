//! Homework records and the payload types that create or modify them.
//!
//! Field names are camelCase on the wire (`dueDate`), matching what the web
//! frontend sends and expects.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ─── Record ──────────────────────────────────────────────────────────────────

/// A single homework assignment, identified by a server-assigned `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeworkRecord {
  pub id:        u64,
  pub title:     String,
  pub subject:   String,
  /// Free-form date string. Never parsed by the server.
  pub due_date:  String,
  pub completed: bool,
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// A validated create payload. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHomework {
  pub title:     String,
  pub subject:   String,
  pub due_date:  String,
  pub completed: bool,
}

impl NewHomework {
  /// Build a payload, rejecting a missing or empty `title`, `subject` or
  /// `due_date` with [`Error::MissingData`]. `completed` defaults to `false`.
  pub fn new(
    title: Option<String>,
    subject: Option<String>,
    due_date: Option<String>,
    completed: Option<bool>,
  ) -> Result<Self> {
    Ok(Self {
      title:     required(title)?,
      subject:   required(subject)?,
      due_date:  required(due_date)?,
      completed: completed.unwrap_or(false),
    })
  }

  /// Attach an id, producing the record the store will hold.
  pub fn into_record(self, id: u64) -> HomeworkRecord {
    HomeworkRecord {
      id,
      title: self.title,
      subject: self.subject,
      due_date: self.due_date,
      completed: self.completed,
    }
  }
}

fn required(value: Option<String>) -> Result<String> {
  value.filter(|v| !v.is_empty()).ok_or(Error::MissingData)
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// A partial update. Only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeworkPatch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subject:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub due_date:  Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub completed: Option<bool>,
}

impl HomeworkPatch {
  /// `true` when applying this patch would change nothing.
  pub fn is_empty(&self) -> bool {
    self.title.is_none()
      && self.subject.is_none()
      && self.due_date.is_none()
      && self.completed.is_none()
  }

  /// Overwrite the fields of `record` that are present in the patch.
  pub fn apply(self, record: &mut HomeworkRecord) {
    if let Some(title) = self.title {
      record.title = title;
    }
    if let Some(subject) = self.subject {
      record.subject = subject;
    }
    if let Some(due_date) = self.due_date {
      record.due_date = due_date;
    }
    if let Some(completed) = self.completed {
      record.completed = completed;
    }
  }
}
