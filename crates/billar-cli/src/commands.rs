//! Subcommand bodies. Each returns the text to print.

use std::{collections::BTreeSet, fmt::Write as _, path::Path};

use anyhow::{Context, Result, bail};
use billar_core::{
  day::Day,
  geo::{self, Coordinate, TableTag, VenueLocation},
  schedule::{DaySchedule, WeeklySchedule},
  validator::{self, INVALID_HOURS_MESSAGE},
};
use billar_wire::{encode_hour, week_from_json};

fn read(path: &Path) -> Result<String> {
  std::fs::read_to_string(path)
    .with_context(|| format!("reading {}", path.display()))
}

fn load_week(path: &Path) -> Result<WeeklySchedule> {
  week_from_json(&read(path)?)
    .with_context(|| format!("decoding schedule in {}", path.display()))
}

// ─── validate ─────────────────────────────────────────────────────────────────

pub fn validate(path: &Path) -> Result<String> {
  let week = load_week(path)?;
  let report = render_week(&week);
  if !week.is_valid() {
    tracing::warn!(days = week.invalid_days().len(), "invalid schedule");
    bail!("{report}{INVALID_HOURS_MESSAGE}");
  }
  Ok(report)
}

/// One line per day, followed by indented issues for invalid days.
pub fn render_week(week: &WeeklySchedule) -> String {
  let mut out = String::new();
  for (day, schedule) in week.iter() {
    let _ = writeln!(out, "{:<10} {}", day.label(), render_day(schedule));
    for issue in schedule.issues() {
      let _ = writeln!(out, "{:<10}   ! {issue}", "");
    }
  }
  out
}

fn render_day(schedule: &DaySchedule) -> String {
  if !schedule.is_open() {
    return "cerrado".to_string();
  }
  if schedule.shifts().is_empty() {
    return "abierto, sin turnos".to_string();
  }
  validator::sorted(schedule.shifts())
    .iter()
    .map(|s| {
      let mark = if s.active { "" } else { " (inactivo)" };
      format!("{:02}:00-{:02}:00{mark}", s.open, s.close)
    })
    .collect::<Vec<_>>()
    .join(", ")
}

// ─── suggest ──────────────────────────────────────────────────────────────────

pub fn suggest(path: &Path, day: Day) -> Result<String> {
  let week = load_week(path)?;
  let existing = week.day(day).shifts();
  let (open, close) = validator::suggest_shift_times(existing);

  let mut trial = existing.to_vec();
  trial.push(billar_core::shift::Shift::new(open, close));
  if !validator::validate(&trial) {
    tracing::warn!(%day, "no default window fits; suggestion conflicts");
  }
  Ok(format!("{}-{}\n", encode_hour(open)?, encode_hour(close)?))
}

// ─── nearby ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct NearbyQuery {
  pub lat:              f64,
  pub lon:              f64,
  pub radius_km:        f64,
  pub tags:             BTreeSet<TableTag>,
  pub sort_by_distance: bool,
}

pub fn nearby(path: &Path, query: &NearbyQuery) -> Result<String> {
  if !query.radius_km.is_finite() || query.radius_km < 0.0 {
    bail!(
      "radius_km must be a non-negative number, got {}",
      query.radius_km
    );
  }
  let venues = billar_wire::decode_venues(&read(path)?)
    .with_context(|| format!("decoding venues in {}", path.display()))?;
  Ok(render_venues(&search(&venues, query)))
}

pub fn search(venues: &[VenueLocation], query: &NearbyQuery) -> Vec<VenueLocation> {
  let center = Coordinate::new(query.lat, query.lon);
  let mut found = geo::filter_venues(venues, center, query.radius_km, &query.tags);
  if query.sort_by_distance {
    geo::sort_by_distance(&mut found);
  }
  found
}

fn render_venues(venues: &[VenueLocation]) -> String {
  let mut out = String::new();
  for v in venues {
    let tags: Vec<&str> = v.tags.iter().map(|t| t.as_ref()).collect();
    let _ = writeln!(
      out,
      "{:>6.2} km  {}  [{}]",
      v.distance_km.unwrap_or_default(),
      v.name,
      tags.join(", ")
    );
  }
  out
}
