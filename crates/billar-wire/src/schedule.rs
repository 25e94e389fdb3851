//! Weekly opening hours as the backend exchanges them.
//!
//! ```json
//! {
//!   "LUNES": [
//!     { "id": 12, "hora_apertura": "08:00", "hora_cierre": "20:00", "estado": "ACTIVO" }
//!   ],
//!   "MARTES": []
//! }
//! ```
//!
//! A missing key or an empty list is a closed day. Shifts without an `id`
//! have not been saved yet.

use std::collections::BTreeMap;

use billar_core::{
  day::Day,
  schedule::{DaySchedule, WeeklySchedule},
  shift::{Shift, ShiftId},
};
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  hour::{decode_hour, encode_hour},
};

// ─── Wire types ──────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftStatus {
  #[default]
  Activo,
  Inactivo,
}

impl From<bool> for ShiftStatus {
  fn from(active: bool) -> Self {
    if active { Self::Activo } else { Self::Inactivo }
  }
}

impl ShiftStatus {
  pub fn is_active(self) -> bool { matches!(self, Self::Activo) }
}

/// One shift on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireShift {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:            Option<i64>,
  pub hora_apertura: String,
  pub hora_cierre:   String,
  #[serde(default)]
  pub estado:        ShiftStatus,
}

/// A week of shifts keyed by backend day name.
pub type WireWeek = BTreeMap<Day, Vec<WireShift>>;

// ─── Shifts ──────────────────────────────────────────────────────────────────

pub fn encode_shift(shift: &Shift) -> Result<WireShift> {
  Ok(WireShift {
    id:            match shift.id {
      ShiftId::Saved(id) => Some(id),
      ShiftId::Draft(_) => None,
    },
    hora_apertura: encode_hour(shift.open)?,
    hora_cierre:   encode_hour(shift.close)?,
    estado:        shift.active.into(),
  })
}

/// Decode one shift. Shifts without an `id` get a fresh draft id.
pub fn decode_shift(wire: &WireShift) -> Result<Shift> {
  Ok(Shift {
    id:     wire.id.map_or_else(ShiftId::draft, ShiftId::Saved),
    open:   decode_hour(&wire.hora_apertura)?,
    close:  decode_hour(&wire.hora_cierre)?,
    active: wire.estado.is_active(),
  })
}

/// Decode a list of shifts, without attaching a day to errors.
pub fn decode_shifts(wire: &[WireShift]) -> Result<Vec<Shift>> {
  wire.iter().map(decode_shift).collect()
}

// ─── Weeks ───────────────────────────────────────────────────────────────────

/// Encode every day, closed days as empty lists.
pub fn encode_week(week: &WeeklySchedule) -> Result<WireWeek> {
  week
    .iter()
    .map(|(day, schedule)| -> Result<(Day, Vec<WireShift>)> {
      let shifts = schedule
        .shifts()
        .iter()
        .enumerate()
        .map(|(index, shift)| {
          encode_shift(shift).map_err(|e| in_day(day, index, e))
        })
        .collect::<Result<Vec<_>>>()?;
      Ok((day, shifts))
    })
    .collect()
}

/// Decode a week. Days with shifts come back open and not being edited.
///
/// Shift hours are decoded but not validated; use
/// [`WeeklySchedule::invalid_days`] for that.
pub fn decode_week(wire: &WireWeek) -> Result<WeeklySchedule> {
  let mut week = WeeklySchedule::new();
  for (&day, shifts) in wire {
    if shifts.is_empty() {
      continue;
    }
    let decoded = shifts
      .iter()
      .enumerate()
      .map(|(index, s)| decode_shift(s).map_err(|e| in_day(day, index, e)))
      .collect::<Result<Vec<_>>>()?;
    *week.day_mut(day) = DaySchedule::open_with(decoded);
  }
  Ok(week)
}

pub fn week_from_json(input: &str) -> Result<WeeklySchedule> {
  let wire: WireWeek = serde_json::from_str(input)?;
  decode_week(&wire)
}

pub fn week_to_json(week: &WeeklySchedule) -> Result<String> {
  Ok(serde_json::to_string_pretty(&encode_week(week)?)?)
}

fn in_day(day: Day, index: usize, source: Error) -> Error {
  Error::Shift {
    day,
    index,
    source: Box::new(source),
  }
}
