//! Venue records as the backend lists them for the discovery map.

use billar_core::geo::{Coordinate, TableTag, VenueLocation};
use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireVenue {
  pub id:           i64,
  pub nombre:       String,
  pub latitud:      f64,
  pub longitud:     f64,
  #[serde(default)]
  pub tipos_mesa:   Vec<TableTag>,
  /// Only present in query responses.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub distancia_km: Option<f64>,
}

impl From<WireVenue> for VenueLocation {
  fn from(w: WireVenue) -> Self {
    VenueLocation {
      id:          w.id,
      name:        w.nombre,
      coordinate:  Coordinate::new(w.latitud, w.longitud),
      tags:        w.tipos_mesa.into_iter().collect(),
      distance_km: w.distancia_km,
    }
  }
}

pub fn encode_venue(venue: &VenueLocation) -> WireVenue {
  WireVenue {
    id:           venue.id,
    nombre:       venue.name.clone(),
    latitud:      venue.coordinate.lat,
    longitud:     venue.coordinate.lon,
    tipos_mesa:   venue.tags.iter().copied().collect(),
    distancia_km: venue.distance_km,
  }
}

/// Decode a JSON array of venues. An unknown table type fails the whole
/// document.
pub fn decode_venues(input: &str) -> Result<Vec<VenueLocation>> {
  let wire: Vec<WireVenue> = serde_json::from_str(input)?;
  Ok(wire.into_iter().map(VenueLocation::from).collect())
}
