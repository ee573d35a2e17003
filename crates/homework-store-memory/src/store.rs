//! [`MemoryStore`] — the in-memory implementation of [`HomeworkStore`].

use std::{collections::HashSet, sync::Arc};

use homework_core::{
  homework::{HomeworkPatch, HomeworkRecord, NewHomework},
  store::HomeworkStore,
};
use tokio::sync::Mutex;

use crate::{Error, Result};

// ─── Seed data ───────────────────────────────────────────────────────────────

/// The two records every fresh store starts with.
pub fn seed_records() -> Vec<HomeworkRecord> {
  vec![
    HomeworkRecord {
      id:        1,
      title:     "Math Homework".to_owned(),
      subject:   "Math".to_owned(),
      due_date:  "2024-03-10".to_owned(),
      completed: false,
    },
    HomeworkRecord {
      id:        2,
      title:     "History Essay".to_owned(),
      subject:   "History".to_owned(),
      due_date:  "2024-03-15".to_owned(),
      completed: true,
    },
  ]
}

// ─── Store ───────────────────────────────────────────────────────────────────

struct Inner {
  records: Vec<HomeworkRecord>,
  /// `None` once `u64::MAX` has been allocated.
  next_id: Option<u64>,
}

/// A homework store held entirely in process memory.
///
/// Cloning is cheap and every clone shares the same collection.
#[derive(Clone)]
pub struct MemoryStore {
  inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
  /// A store holding the [seed records](seed_records).
  pub fn new() -> Self {
    let records = seed_records();
    let next_id = records
      .iter()
      .map(|r| r.id)
      .max()
      .and_then(|max| max.checked_add(1));
    Self::from_parts(records, next_id)
  }

  /// A store with no records; the first id handed out is `1`.
  pub fn empty() -> Self { Self::from_parts(Vec::new(), Some(1)) }

  /// A store holding `records` in the given order.
  ///
  /// Fails if two records share an id, or if a record already holds
  /// `u64::MAX` so no id is left to allocate. The counter starts one above
  /// the highest id present.
  pub fn with_records(records: Vec<HomeworkRecord>) -> Result<Self> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
      if !seen.insert(record.id) {
        return Err(Error::DuplicateId(record.id));
      }
    }
    let next_id = match seen.into_iter().max() {
      Some(max) => max.checked_add(1).ok_or(Error::IdSpaceExhausted)?,
      None => 1,
    };
    Ok(Self::from_parts(records, Some(next_id)))
  }

  fn from_parts(records: Vec<HomeworkRecord>, next_id: Option<u64>) -> Self {
    Self {
      inner: Arc::new(Mutex::new(Inner { records, next_id })),
    }
  }
}

impl Default for MemoryStore {
  fn default() -> Self { Self::new() }
}

// ─── HomeworkStore impl ──────────────────────────────────────────────────────

impl HomeworkStore for MemoryStore {
  type Error = Error;

  async fn list(&self) -> Result<Vec<HomeworkRecord>, Error> {
    Ok(self.inner.lock().await.records.clone())
  }

  async fn get(&self, id: u64) -> Result<Option<HomeworkRecord>, Error> {
    let inner = self.inner.lock().await;
    Ok(inner.records.iter().find(|r| r.id == id).cloned())
  }

  async fn create(
    &self,
    input: NewHomework,
  ) -> Result<HomeworkRecord, Error> {
    let mut inner = self.inner.lock().await;
    let id = inner.next_id.ok_or(Error::IdSpaceExhausted)?;
    inner.next_id = id.checked_add(1);

    let record = input.into_record(id);
    inner.records.push(record.clone());
    tracing::debug!(id, "created homework");
    Ok(record)
  }

  async fn update(
    &self,
    id: u64,
    patch: HomeworkPatch,
  ) -> Result<Option<HomeworkRecord>, Error> {
    let mut inner = self.inner.lock().await;
    let Some(record) = inner.records.iter_mut().find(|r| r.id == id) else {
      return Ok(None);
    };
    if !patch.is_empty() {
      patch.apply(record);
      tracing::debug!(id, "updated homework");
    }
    Ok(Some(record.clone()))
  }

  async fn delete(&self, id: u64) -> Result<bool, Error> {
    let mut inner = self.inner.lock().await;
    let before = inner.records.len();
    inner.records.retain(|r| r.id != id);
    let removed = inner.records.len() != before;
    if removed {
      tracing::debug!(id, "deleted homework");
    }
    Ok(removed)
  }
}
