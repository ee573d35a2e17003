//! HTTP server assembly for the homework manager.
//!
//! Mounts the JSON API under `/api`, adds permissive CORS so a frontend dev
//! server on another origin can call it, and traces every request.

use std::{path::Path, sync::Arc};

use axum::Router;
use homework_core::store::HomeworkStore;
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

pub const DEFAULT_HOST: &str = "0.0.0.0";
/// The port the frontend's development proxy forwards `/api` to.
pub const DEFAULT_PORT: u16 = 5000;

/// Runtime server configuration, deserialised from `config.toml` and
/// `HOMEWORK_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

impl ServerConfig {
  /// Layer defaults, the optional TOML file at `path`, then the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", DEFAULT_HOST)?
      .set_default("port", i64::from(DEFAULT_PORT))?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("HOMEWORK"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router for `store`.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: HomeworkStore + 'static,
{
  Router::new()
    .nest("/api", homework_api::api_router(store))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use homework_store_memory::MemoryStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  async fn oneshot_json(
    store: &MemoryStore,
    method: &str,
    uri: &str,
    body: Option<Value>,
  ) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(v) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(v.to_string())
      }
      None => Body::empty(),
    };
    let resp = router(Arc::new(store.clone()))
      .oneshot(builder.body(body).unwrap())
      .await
      .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let json = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
  }

  fn ids(list: &Value) -> Vec<u64> {
    list
      .as_array()
      .unwrap()
      .iter()
      .map(|r| r["id"].as_u64().unwrap())
      .collect()
  }

  // ── Configuration ───────────────────────────────────────────────────────────

  #[test]
  fn missing_config_file_falls_back_to_defaults() {
    let cfg =
      ServerConfig::load(Path::new("/nonexistent/homework-config.toml")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.address(), "0.0.0.0:5000");
  }

  #[test]
  fn config_file_overrides_defaults() {
    let path = std::env::temp_dir()
      .join(format!("homework-server-test-{}.toml", std::process::id()));
    std::fs::write(&path, "host = \"127.0.0.1\"\nport = 8123\n").unwrap();
    let cfg = ServerConfig::load(&path);
    std::fs::remove_file(&path).ok();

    let cfg = cfg.unwrap();
    assert_eq!(cfg.address(), "127.0.0.1:8123");
  }

  // ── Routing ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn api_is_nested_under_api_prefix() {
    let store = MemoryStore::new();
    let (status, _) = oneshot_json(&store, "GET", "/homework", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = oneshot_json(&store, "GET", "/api/homework", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2]);
  }

  #[tokio::test]
  async fn cross_origin_requests_are_allowed() {
    let store = MemoryStore::new();
    let req = Request::builder()
      .method("GET")
      .uri("/api/homework")
      .header(header::ORIGIN, "http://localhost:3000")
      .body(Body::empty())
      .unwrap();
    let resp = router(Arc::new(store)).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let allow = resp
      .headers()
      .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
      .unwrap();
    assert_eq!(allow, "*");
  }

  #[tokio::test]
  async fn preflight_is_answered() {
    let store = MemoryStore::new();
    let req = Request::builder()
      .method("OPTIONS")
      .uri("/api/homework/1")
      .header(header::ORIGIN, "http://localhost:3000")
      .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
      .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
      .body(Body::empty())
      .unwrap();
    let resp = router(Arc::new(store)).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
  }

  // ── End to end ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_update_delete_round_trip() {
    let store = MemoryStore::new();

    let (status, created) = oneshot_json(
      &store,
      "POST",
      "/api/homework",
      Some(json!({
        "title": "Science Project",
        "subject": "Science",
        "dueDate": "2024-04-01",
      })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 3);

    let (_, list) = oneshot_json(&store, "GET", "/api/homework", None).await;
    assert_eq!(ids(&list), vec![1, 2, 3]);

    let (status, updated) = oneshot_json(
      &store,
      "PUT",
      "/api/homework/3",
      Some(json!({ "completed": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["title"], "Science Project");

    let (_, list) = oneshot_json(&store, "GET", "/api/homework", None).await;
    assert_eq!(list[2]["completed"], true);

    let (status, body) =
      oneshot_json(&store, "DELETE", "/api/homework/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Homework deleted successfully");

    let (_, list) = oneshot_json(&store, "GET", "/api/homework", None).await;
    assert_eq!(ids(&list), vec![1, 2]);

    let (status, again) = oneshot_json(
      &store,
      "POST",
      "/api/homework",
      Some(json!({
        "title": "Lab Report",
        "subject": "Chemistry",
        "dueDate": "2024-04-08",
      })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(again["id"], 4);
  }
}
