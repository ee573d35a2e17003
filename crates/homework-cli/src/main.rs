//! `homework` — command-line client for the homework manager API.
//!
//! # Usage
//!
//! ```
//! homework list
//! homework add "Science Project" Science 2024-04-01
//! homework toggle 3
//! homework delete 3
//! homework --url http://localhost:5000 list
//! homework --config ~/.config/homework/config.toml list
//! ```

mod client;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use client::{ApiClient, ApiConfig};
use homework_core::homework::{HomeworkPatch, HomeworkRecord};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "http://localhost:5000";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "homework", about = "Manage homework assignments")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the homework server (default: http://localhost:5000).
  #[arg(long, env = "HOMEWORK_URL")]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
  /// List every assignment.
  List,
  /// Add a new assignment.
  Add {
    title:    String,
    subject:  String,
    due_date: String,
  },
  /// Flip an assignment between complete and incomplete.
  Toggle { id: u64 },
  /// Delete an assignment.
  Delete { id: u64 },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flag overrides config file, which overrides the default.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| DEFAULT_URL.to_string()),
  };
  tracing::debug!(base_url = %api_config.base_url, "using homework server");

  let client = ApiClient::new(api_config)?;
  run(&client, args.command).await
}

async fn run(client: &ApiClient, command: Command) -> Result<()> {
  match command {
    Command::List => {
      let records = client.list().await?;
      if records.is_empty() {
        println!("No homework assignments yet!");
      }
      for record in &records {
        println!("{}", format_record(record));
      }
    }
    Command::Add {
      title,
      subject,
      due_date,
    } => {
      if title.is_empty() || subject.is_empty() || due_date.is_empty() {
        bail!("title, subject and due date must all be non-empty");
      }
      let record = client.create(&title, &subject, &due_date).await?;
      println!("{}", format_record(&record));
    }
    Command::Toggle { id } => {
      let records = client.list().await?;
      let Some(current) = records.iter().find(|r| r.id == id) else {
        bail!("Homework not found: {id}");
      };
      let patch = HomeworkPatch {
        completed: Some(!current.completed),
        ..Default::default()
      };
      let record = client.update(id, &patch).await?;
      println!("{}", format_record(&record));
    }
    Command::Delete { id } => {
      let message = client.delete(id).await?;
      println!("{message}");
    }
  }
  Ok(())
}

/// One line per record: completion box, id, title, subject and due date.
fn format_record(record: &HomeworkRecord) -> String {
  let mark = if record.completed { "x" } else { " " };
  format!(
    "[{mark}] {:>3}  {} ({}) - due {}",
    record.id, record.title, record.subject, record.due_date
  )
}
