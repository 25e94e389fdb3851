//! billar-server binary.
//!
//! Reads `billar.toml` (or the path given with `--config`), overlays
//! `BILLAR_*` environment variables, loads the venue list, and serves the
//! JSON API over HTTP.
//!
//! ```toml
//! host              = "0.0.0.0"
//! port              = 8080
//! venues_path       = "~/billar/venues.json"
//! default_radius_km = 5.0
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use billar_api::{AppState, ServerConfig};
use billar_core::directory::StaticDirectory;
use clap::Parser;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Billar venue tooling API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "billar.toml")]
  config: PathBuf,
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
  let server_cfg = load_config(&cli.config)?;

  let venues = match &server_cfg.venues_path {
    Some(path) => load_venues(&expand_tilde(path)).await?,
    None => {
      tracing::warn!("no venues_path configured; nearby searches return nothing");
      Vec::new()
    }
  };
  tracing::info!(count = venues.len(), "loaded venues");

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  let state = AppState {
    directory: Arc::new(StaticDirectory::new(venues)),
    config:    Arc::new(server_cfg),
  };
  let app = billar_api::router(state).layer(TraceLayer::new_for_http());

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Defaults, then the TOML file if present, then `BILLAR_*` variables.
fn load_config(path: &Path) -> anyhow::Result<ServerConfig> {
  let defaults = ServerConfig::default();
  let settings = config::Config::builder()
    .set_default("host", defaults.host)?
    .set_default("port", i64::from(defaults.port))?
    .set_default("default_radius_km", defaults.default_radius_km)?
    .add_source(config::File::from(path.to_path_buf()).required(false))
    .add_source(config::Environment::with_prefix("BILLAR"))
    .build()
    .context("failed to read config file")?;

  settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")
}

async fn load_venues(
  path: &Path,
) -> anyhow::Result<Vec<billar_core::geo::VenueLocation>> {
  let raw = tokio::fs::read_to_string(path)
    .await
    .with_context(|| format!("failed to read venues from {path:?}"))?;
  billar_wire::decode_venues(&raw)
    .with_context(|| format!("failed to decode venues in {path:?}"))
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
