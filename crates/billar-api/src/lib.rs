//! JSON API for Billar venue tooling.
//!
//! Exposes an axum [`Router`] that validates weekly opening hours, suggests
//! default shift windows, and answers nearby-venue searches from any
//! [`VenueDirectory`]. TLS and auth are the caller's responsibility.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/schedules/validate` | Body: wire week; per-day report |
//! | `POST` | `/schedules/suggest` | Body: `{"shifts":[...]}` |
//! | `GET`  | `/venues/nearby` | `?lat&lon[&radius_km][&tags][&sort=distance]` |
//! | `GET`  | `/health` | Liveness probe |

pub mod error;
pub mod schedules;
pub mod venues;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Json, Router,
  routing::{get, post},
};
use billar_core::directory::VenueDirectory;
use serde::Deserialize;
use serde_json::{Value, json};

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `billar.toml` and
/// `BILLAR_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:              String,
  pub port:              u16,
  /// JSON file holding the venue list; no file means no venues.
  pub venues_path:       Option<PathBuf>,
  /// Radius used by `/venues/nearby` when the query names none.
  pub default_radius_km: f64,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:              "127.0.0.1".to_string(),
      port:              8080,
      venues_path:       None,
      default_radius_km: 5.0,
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<D: VenueDirectory> {
  pub directory: Arc<D>,
  pub config:    Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the API router for `state`.
pub fn router<D>(state: AppState<D>) -> Router
where
  D: VenueDirectory + Clone + 'static,
{
  Router::new()
    .route("/health", get(health))
    // Schedules
    .route("/schedules/validate", post(schedules::validate))
    .route("/schedules/suggest", post(schedules::suggest))
    // Venues
    .route("/venues/nearby", get(venues::nearby::<D>))
    .with_state(state)
}

async fn health() -> Json<Value> { Json(json!({ "status": "ok" })) }
