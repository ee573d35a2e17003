//! JSON REST API for the homework manager.
//!
//! Exposes an axum [`Router`] backed by any
//! [`homework_core::store::HomeworkStore`]. CORS, tracing and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", homework_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod extract;
pub mod homework;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, put},
};
use homework_core::store::HomeworkStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: HomeworkStore + 'static,
{
  Router::new()
    .route(
      "/homework",
      get(homework::list::<S>).post(homework::create::<S>),
    )
    .route(
      "/homework/{id}",
      put(homework::update::<S>).delete(homework::remove::<S>),
    )
    .with_state(store)
}
