//! Async HTTP client wrapping the homework JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use homework_core::homework::{HomeworkPatch, HomeworkRecord};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;

/// Connection settings for the homework API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the homework JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

/// Error body returned by the server on 4xx/5xx.
#[derive(Deserialize)]
struct ErrorBody {
  error: String,
}

/// Confirmation body returned by `DELETE`.
#[derive(Deserialize)]
struct MessageBody {
  message: String,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  pub(crate) fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  /// `GET /api/homework`
  pub async fn list(&self) -> Result<Vec<HomeworkRecord>> {
    let resp = self
      .client
      .get(self.url("/homework"))
      .send()
      .await
      .context("GET /homework failed")?;
    let resp = check(resp, "GET /homework").await?;
    resp.json().await.context("deserialising homework list")
  }

  /// `POST /api/homework`
  pub async fn create(
    &self,
    title: &str,
    subject: &str,
    due_date: &str,
  ) -> Result<HomeworkRecord> {
    let resp = self
      .client
      .post(self.url("/homework"))
      .json(&json!({
        "title": title,
        "subject": subject,
        "dueDate": due_date,
      }))
      .send()
      .await
      .context("POST /homework failed")?;
    let resp = check(resp, "POST /homework").await?;
    resp.json().await.context("deserialising created homework")
  }

  /// `PUT /api/homework/{id}`
  pub async fn update(&self, id: u64, patch: &HomeworkPatch) -> Result<HomeworkRecord> {
    let path = format!("/homework/{id}");
    let resp = self
      .client
      .put(self.url(&path))
      .json(patch)
      .send()
      .await
      .with_context(|| format!("PUT {path} failed"))?;
    let resp = check(resp, &format!("PUT {path}")).await?;
    resp.json().await.context("deserialising updated homework")
  }

  /// `DELETE /api/homework/{id}` — returns the server's confirmation message.
  pub async fn delete(&self, id: u64) -> Result<String> {
    let path = format!("/homework/{id}");
    let resp = self
      .client
      .delete(self.url(&path))
      .send()
      .await
      .with_context(|| format!("DELETE {path} failed"))?;
    let resp = check(resp, &format!("DELETE {path}")).await?;
    let body: MessageBody = resp.json().await.context("deserialising delete reply")?;
    Ok(body.message)
  }
}

/// Pass successful responses through; turn failures into an error carrying
/// the server's `error` message when there is one.
async fn check(resp: Response, what: &str) -> Result<Response> {
  let status = resp.status();
  if status.is_success() {
    return Ok(resp);
  }
  match resp.json::<ErrorBody>().await {
    Ok(body) => Err(anyhow!("{what} → {status}: {}", body.error)),
    Err(_) => Err(anyhow!("{what} → {status}")),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn client(base_url: &str) -> ApiClient {
    ApiClient::new(ApiConfig {
      base_url: base_url.to_string(),
    })
    .unwrap()
  }

  #[test]
  fn url_joins_base_and_api_prefix() {
    assert_eq!(
      client("http://localhost:5000").url("/homework"),
      "http://localhost:5000/api/homework"
    );
  }

  #[test]
  fn url_tolerates_trailing_slash() {
    assert_eq!(
      client("http://example.com:8080/").url("/homework/3"),
      "http://example.com:8080/api/homework/3"
    );
  }
}
