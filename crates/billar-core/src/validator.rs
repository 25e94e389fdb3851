//! Validation of the shifts configured for one day.
//!
//! A day's shift set is valid when it holds one or two shifts, every shift
//! closes strictly after it opens within the same day, and no two windows
//! `[open, close)` intersect. Touching windows (`8–12` and `12–20`) are fine.
//! Inactive shifts keep their window reserved and take part in the overlap
//! check, so re-activating one never needs a second validation pass.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shift::{LAST_HOUR, Shift};

/// Most shifts a single day may hold.
pub const MAX_SHIFTS_PER_DAY: usize = 2;

/// Default windows offered for a new shift, in priority order.
pub const SUGGESTED_WINDOWS: [(u8, u8); 3] = [(8, 20), (20, 22), (10, 18)];

/// Shown to owners when any day fails validation.
pub const INVALID_HOURS_MESSAGE: &str =
  "Revisa las horas: Cerrar debe ser mayor que Abrir y sin solaparse";

// ─── Diagnosis ───────────────────────────────────────────────────────────────

/// One reason a shift set is rejected. Indices refer to the caller's input
/// order, not the sorted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShiftIssue {
  /// An open day with no shifts.
  Empty,
  TooMany { count: usize },
  /// An hour above 23.
  HourOutOfRange { index: usize },
  CloseNotAfterOpen { index: usize },
  /// `earlier` opens no later than `later`; equal opens keep input order.
  Overlap { earlier: usize, later: usize },
}

impl fmt::Display for ShiftIssue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Empty => write!(f, "an open day needs at least one shift"),
      Self::TooMany { count } => write!(
        f,
        "{count} shifts configured, at most {MAX_SHIFTS_PER_DAY} allowed"
      ),
      Self::HourOutOfRange { index } => {
        write!(f, "shift {index} uses an hour past {LAST_HOUR}")
      }
      Self::CloseNotAfterOpen { index } => {
        write!(f, "shift {index} closes at or before it opens")
      }
      Self::Overlap { earlier, later } => {
        write!(f, "shifts {earlier} and {later} overlap")
      }
    }
  }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Shifts ordered by opening hour. The sort is stable: shifts opening at the
/// same hour keep their input order.
pub fn sorted(shifts: &[Shift]) -> Vec<Shift> {
  let mut out = shifts.to_vec();
  out.sort_by_key(|s| s.open);
  out
}

/// Every issue that makes `shifts` invalid for an open day, in a stable
/// order: count issues first, then per-shift issues, then overlaps.
pub fn diagnose(shifts: &[Shift]) -> Vec<ShiftIssue> {
  let mut issues = Vec::new();

  if shifts.is_empty() {
    issues.push(ShiftIssue::Empty);
    return issues;
  }
  if shifts.len() > MAX_SHIFTS_PER_DAY {
    issues.push(ShiftIssue::TooMany {
      count: shifts.len(),
    });
  }

  for (index, shift) in shifts.iter().enumerate() {
    if !shift.in_range() {
      issues.push(ShiftIssue::HourOutOfRange { index });
    } else if shift.close <= shift.open {
      issues.push(ShiftIssue::CloseNotAfterOpen { index });
    }
  }

  // Input indices in opening order; sort_by_key is stable.
  let mut order: Vec<usize> = (0..shifts.len()).collect();
  order.sort_by_key(|&i| shifts[i].open);

  for (pos, &earlier) in order.iter().enumerate() {
    for &later in &order[pos + 1..] {
      if shifts[earlier].overlaps(&shifts[later]) {
        issues.push(ShiftIssue::Overlap { earlier, later });
      }
    }
  }

  issues
}

/// Whether `shifts` may be submitted for an open day.
///
/// Empty input is invalid; a closed day with no shifts is the caller's
/// concern (see [`crate::schedule::DaySchedule::is_valid`]).
pub fn validate(shifts: &[Shift]) -> bool { diagnose(shifts).is_empty() }

// ─── Suggestions ─────────────────────────────────────────────────────────────

/// A default `(open, close)` for a shift about to be added next to
/// `existing`.
///
/// Returns the first of [`SUGGESTED_WINDOWS`] that keeps the set valid. When
/// none does, falls back to the first window without searching further; the
/// result may then conflict, and callers validate again before saving.
pub fn suggest_shift_times(existing: &[Shift]) -> (u8, u8) {
  let mut trial = existing.to_vec();
  for (open, close) in SUGGESTED_WINDOWS {
    trial.push(Shift::new(open, close));
    if validate(&trial) {
      return (open, close);
    }
    trial.pop();
  }
  SUGGESTED_WINDOWS[0]
}

#[cfg(test)]
mod tests {
  use super::*;

  fn s(open: u8, close: u8) -> Shift { Shift::new(open, close) }

  // ── validate ────────────────────────────────────────────────────────────

  #[test]
  fn close_not_after_open_is_invalid() {
    for (open, close) in [(8, 8), (12, 9), (23, 0), (5, 0)] {
      assert!(!validate(&[s(open, close)]), "{open}-{close}");
    }
  }

  #[test]
  fn disjoint_pairs_are_valid_in_any_order() {
    for (a, b) in [((8, 12), (14, 20)), ((0, 1), (22, 23)), ((9, 10), (10, 11))]
    {
      assert!(validate(&[s(a.0, a.1), s(b.0, b.1)]));
      assert!(validate(&[s(b.0, b.1), s(a.0, a.1)]));
    }
  }

  #[test]
  fn overlapping_pair_is_invalid() {
    assert!(!validate(&[s(8, 20), s(15, 22)]));
    assert!(!validate(&[s(15, 22), s(8, 20)]));
  }

  #[test]
  fn touching_boundary_is_valid() {
    assert!(validate(&[s(8, 12), s(12, 20)]));
  }

  #[test]
  fn empty_set_is_invalid() {
    assert!(!validate(&[]));
    assert_eq!(diagnose(&[]), vec![ShiftIssue::Empty]);
  }

  #[test]
  fn single_full_day_shift_is_valid() {
    assert!(validate(&[s(0, 23)]));
  }

  #[test]
  fn inactive_shift_still_reserves_its_window() {
    let inactive = s(8, 20).with_active(false);
    assert!(!validate(&[inactive, s(15, 22)]));
  }

  #[test]
  fn more_than_two_shifts_is_invalid() {
    let shifts = [s(6, 8), s(10, 12), s(14, 16)];
    assert!(!validate(&shifts));
    assert_eq!(diagnose(&shifts), vec![ShiftIssue::TooMany { count: 3 }]);
  }

  #[test]
  fn hours_past_23_are_rejected() {
    assert!(!validate(&[s(20, 24)]));
    assert_eq!(
      diagnose(&[s(8, 12), s(30, 40)]),
      vec![ShiftIssue::HourOutOfRange { index: 1 }]
    );
  }

  // ── diagnose ────────────────────────────────────────────────────────────

  #[test]
  fn overlap_reports_input_indices_in_opening_order() {
    let issues = diagnose(&[s(15, 22), s(8, 20)]);
    assert_eq!(issues, vec![ShiftIssue::Overlap {
      earlier: 1,
      later:   0,
    }]);
  }

  #[test]
  fn equal_openings_keep_input_order() {
    let issues = diagnose(&[s(10, 12), s(10, 14)]);
    assert_eq!(issues, vec![ShiftIssue::Overlap {
      earlier: 0,
      later:   1,
    }]);
  }

  #[test]
  fn malformed_and_overlapping_are_both_reported() {
    let issues = diagnose(&[s(8, 20), s(18, 12), s(19, 21)]);
    assert_eq!(issues, vec![
      ShiftIssue::TooMany { count: 3 },
      ShiftIssue::CloseNotAfterOpen { index: 1 },
      ShiftIssue::Overlap {
        earlier: 0,
        later:   2,
      },
    ]);
  }

  #[test]
  fn validate_agrees_with_diagnose() {
    for open in 0..24u8 {
      for close in 0..24u8 {
        let set = [s(8, 14), s(open, close)];
        assert_eq!(validate(&set), diagnose(&set).is_empty());
      }
    }
  }

  // ── sorted ──────────────────────────────────────────────────────────────

  #[test]
  fn sorted_is_stable() {
    let a = s(10, 12);
    let b = s(8, 9);
    let c = s(10, 11);
    let out = sorted(&[a, b, c]);
    assert_eq!(out, vec![b, a, c]);
  }

  // ── suggest_shift_times ─────────────────────────────────────────────────

  #[test]
  fn first_suggestion_on_empty_day() {
    assert_eq!(suggest_shift_times(&[]), (8, 20));
  }

  #[test]
  fn second_suggestion_after_default_shift() {
    assert_eq!(suggest_shift_times(&[s(8, 20)]), (20, 22));
  }

  #[test]
  fn third_suggestion_when_evening_is_taken() {
    assert_eq!(suggest_shift_times(&[s(18, 23)]), (10, 18));
  }

  #[test]
  fn falls_back_without_searching_when_nothing_fits() {
    assert_eq!(suggest_shift_times(&[s(9, 21)]), (8, 20));
    assert_eq!(suggest_shift_times(&[s(6, 7), s(21, 23)]), (8, 20));
  }

  #[test]
  fn invalid_shifts_error_shows_owner_message() {
    let err = crate::Error::InvalidShifts(diagnose(&[s(8, 20), s(15, 22)]));
    assert_eq!(err.to_string(), INVALID_HOURS_MESSAGE);
  }
}
