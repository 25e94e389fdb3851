//! Shift — one open/close window within a single business day.
//!
//! Hours are whole hours on the same calendar day. A shift closing "at
//! midnight of the next day" cannot be expressed; `close` must be strictly
//! greater than `open`.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Latest hour a shift may open or close at.
pub const LAST_HOUR: u8 = 23;

// ─── Identity ────────────────────────────────────────────────────────────────

/// Distinguishes shifts created on the client from shifts the backend has
/// already confirmed.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ShiftId {
  /// Created locally and not yet saved.
  Draft(Uuid),
  /// Confirmed by the backend under this numeric id.
  Saved(i64),
}

impl ShiftId {
  /// A fresh client-side id.
  pub fn draft() -> Self { Self::Draft(Uuid::new_v4()) }

  pub fn is_saved(&self) -> bool { matches!(self, Self::Saved(_)) }
}

impl fmt::Display for ShiftId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Draft(id) => write!(f, "draft:{id}"),
      Self::Saved(id) => write!(f, "{id}"),
    }
  }
}

// ─── Shift ───────────────────────────────────────────────────────────────────

/// An open/close window. An inactive shift is kept on the day and still
/// reserves its hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
  pub id:     ShiftId,
  pub open:   u8,
  pub close:  u8,
  pub active: bool,
}

impl Shift {
  /// An active draft shift over `[open, close)`.
  pub fn new(open: u8, close: u8) -> Self {
    Self {
      id: ShiftId::draft(),
      open,
      close,
      active: true,
    }
  }

  /// An active shift that the backend already knows under `id`.
  pub fn saved(id: i64, open: u8, close: u8) -> Self {
    Self {
      id: ShiftId::Saved(id),
      open,
      close,
      active: true,
    }
  }

  pub fn with_active(mut self, active: bool) -> Self {
    self.active = active;
    self
  }

  /// Both hours fall within a single day.
  pub fn in_range(&self) -> bool {
    self.open <= LAST_HOUR && self.close <= LAST_HOUR
  }

  /// Number of whole hours covered; zero for a malformed window.
  pub fn duration_hours(&self) -> u8 { self.close.saturating_sub(self.open) }

  /// Whether the half-open windows `[open, close)` of both shifts intersect.
  /// A malformed shift covers no hours and overlaps nothing.
  pub fn overlaps(&self, other: &Shift) -> bool {
    self.open < self.close
      && other.open < other.close
      && self.open < other.close
      && other.open < self.close
  }
}
