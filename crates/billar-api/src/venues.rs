//! Handler for `GET /venues/nearby`.
//!
//! `tags` is accepted as a comma-separated string (`POOL,SNOOKER`); an empty
//! or missing list accepts every venue.

use std::{collections::BTreeSet, str::FromStr};

use axum::{
  Json,
  extract::{Query, State},
};
use billar_core::{
  directory::VenueDirectory,
  geo::{self, Coordinate, TableTag},
};
use billar_wire::{WireVenue, encode_venue};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
  /// Directory order.
  #[default]
  Directory,
  /// Nearest first.
  Distance,
}

#[derive(Debug, Deserialize)]
pub struct NearbyParams {
  pub lat:       f64,
  pub lon:       f64,
  /// Falls back to the server's `default_radius_km`.
  pub radius_km: Option<f64>,
  pub tags:      Option<String>,
  #[serde(default)]
  pub sort:      SortOrder,
}

/// `GET /venues/nearby?lat=..&lon=..[&radius_km=..][&tags=POOL,SNOOKER][&sort=distance]`
pub async fn nearby<D>(
  State(state): State<AppState<D>>,
  Query(params): Query<NearbyParams>,
) -> Result<Json<Vec<WireVenue>>, ApiError>
where
  D: VenueDirectory,
{
  let radius_km = params.radius_km.unwrap_or(state.config.default_radius_km);
  if !radius_km.is_finite() || radius_km < 0.0 {
    return Err(ApiError::BadRequest(format!(
      "radius_km must be a non-negative number, got {radius_km}"
    )));
  }
  let accepted = parse_tags(params.tags.as_deref())?;

  let venues = state
    .directory
    .list_venues()
    .await
    .map_err(|e| ApiError::Directory(Box::new(e)))?;

  let center = Coordinate::new(params.lat, params.lon);
  let mut found = geo::filter_venues(&venues, center, radius_km, &accepted);
  if params.sort == SortOrder::Distance {
    geo::sort_by_distance(&mut found);
  }

  tracing::debug!(
    lat = params.lat,
    lon = params.lon,
    radius_km,
    total = venues.len(),
    matched = found.len(),
    "nearby search"
  );
  Ok(Json(found.iter().map(encode_venue).collect()))
}

/// Parse a comma-separated tag list, ignoring blanks.
pub fn parse_tags(raw: Option<&str>) -> Result<BTreeSet<TableTag>, ApiError> {
  raw
    .unwrap_or_default()
    .split(',')
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .map(|t| {
      TableTag::from_str(t)
        .map_err(|_| ApiError::BadRequest(format!("unknown table type: {t}")))
    })
    .collect()
}
