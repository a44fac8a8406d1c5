//! candidates-api server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), layers
//! `CANDIDATES_*` environment variables over it, opens the SQLite store, and
//! either serves HTTP or seeds sample data.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use candidates_api::{AppState, ServerConfig, seed::random_candidates};
use candidates_store_sqlite::{SqliteStore, StoreOptions};
use chrono::Utc;
use clap::{Parser, Subcommand};
use rand_core::OsRng;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Candidate directory API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the HTTP API (the default).
  Serve,
  /// Insert randomly generated candidates and exit.
  Seed {
    #[arg(short = 'n', long, default_value_t = 50)]
    count: usize,
  },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;

  let db_path = server_cfg.resolved_database_path();
  let store = SqliteStore::open_with(&db_path, StoreOptions {
    timeout: server_cfg.query_timeout(),
  })
  .await
  .with_context(|| format!("failed to open store at {db_path:?}"))?;

  match cli.command.unwrap_or(Command::Serve) {
    Command::Seed { count } => {
      let batch = random_candidates(&mut OsRng, count, Utc::now());
      let inserted = store
        .insert_many(batch)
        .await
        .context("failed to insert sample candidates")?;
      tracing::info!(count = inserted.len(), "seeded candidates");
    }
    Command::Serve => {
      if server_cfg.external_api_key.is_empty() {
        tracing::warn!("external_api_key is empty; /external/* will answer 500");
      }

      let address = server_cfg.address();
      let state = AppState { store: Arc::new(store), config: Arc::new(server_cfg) };
      let app = candidates_api::router(state);

      tracing::info!("Listening on http://{address}");
      let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

      axum::serve(listener, app).await.context("server error")?;
    }
  }

  Ok(())
}
