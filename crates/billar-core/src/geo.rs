//! Great-circle distances and the radius/tag filter behind venue discovery.
//!
//! Coordinates are decimal degrees (WGS84). Nothing here range-checks them:
//! a location picker or GPS reading produces them, and an out-of-range pair
//! simply yields a meaningless distance.

use std::{cmp::Ordering, collections::BTreeSet};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// ─── Coordinates ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
  pub lat: f64,
  pub lon: f64,
}

impl Coordinate {
  pub fn new(lat: f64, lon: f64) -> Self { Self { lat, lon } }

  pub fn distance_km(&self, other: &Coordinate) -> f64 {
    haversine_km(self.lat, self.lon, other.lat, other.lon)
  }
}

/// Haversine distance between two points, in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
  let phi1 = lat1.to_radians();
  let phi2 = lat2.to_radians();
  let d_phi = (lat2 - lat1).to_radians();
  let d_lambda = (lon2 - lon1).to_radians();

  let a = (d_phi / 2.0).sin().powi(2)
    + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
  let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
  EARTH_RADIUS_KM * c
}

// ─── Venues ──────────────────────────────────────────────────────────────────

/// Kind of table a venue offers.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  Display,
  EnumIter,
  EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum TableTag {
  Pool,
  Snooker,
  Carambola,
}

/// A venue as seen by the discovery map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueLocation {
  pub id:          i64,
  pub name:        String,
  pub coordinate:  Coordinate,
  pub tags:        BTreeSet<TableTag>,
  /// Distance from the last query's center; filled in by [`filter_venues`].
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub distance_km: Option<f64>,
}

impl VenueLocation {
  /// Empty `accepted` means every tag is accepted.
  pub fn offers_any(&self, accepted: &BTreeSet<TableTag>) -> bool {
    accepted.is_empty() || !self.tags.is_disjoint(accepted)
  }
}

/// Venues within `radius_km` of `center` offering at least one of
/// `accepted` (or any venue, when `accepted` is empty).
///
/// Input order is preserved. Each returned venue carries its distance from
/// `center`.
pub fn filter_venues(
  venues: &[VenueLocation],
  center: Coordinate,
  radius_km: f64,
  accepted: &BTreeSet<TableTag>,
) -> Vec<VenueLocation> {
  venues
    .iter()
    .filter(|v| v.offers_any(accepted))
    .filter_map(|v| {
      let distance = center.distance_km(&v.coordinate);
      (distance <= radius_km).then(|| VenueLocation {
        distance_km: Some(distance),
        ..v.clone()
      })
    })
    .collect()
}

/// Nearest first. Venues without a computed distance go last; the sort is
/// stable.
pub fn sort_by_distance(venues: &mut [VenueLocation]) {
  venues.sort_by(|a, b| match (a.distance_km, b.distance_km) {
    (Some(x), Some(y)) => x.total_cmp(&y),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  });
}
