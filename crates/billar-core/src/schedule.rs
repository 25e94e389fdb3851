//! Per-day editing state for a venue's weekly hours.
//!
//! A day is either closed, or open with up to two shifts. Shifts may only be
//! changed while the day is being edited, and editing only ends once the set
//! passes [`validator::diagnose`]. Closing a day discards its shifts; nothing
//! here persists anything.

use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};

use crate::{
  Error, Result,
  day::Day,
  shift::{Shift, ShiftId},
  validator::{self, MAX_SHIFTS_PER_DAY, ShiftIssue},
};

// ─── DaySchedule ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DaySchedule {
  #[default]
  Closed,
  Open {
    editing: bool,
    shifts:  Vec<Shift>,
  },
}

impl DaySchedule {
  /// An open day that is not being edited, as loaded from the backend.
  pub fn open_with(shifts: Vec<Shift>) -> Self {
    Self::Open {
      editing: false,
      shifts,
    }
  }

  pub fn is_open(&self) -> bool { matches!(self, Self::Open { .. }) }

  pub fn is_editing(&self) -> bool {
    matches!(self, Self::Open { editing: true, .. })
  }

  /// Shifts of an open day; empty when closed.
  pub fn shifts(&self) -> &[Shift] {
    match self {
      Self::Closed => &[],
      Self::Open { shifts, .. } => shifts,
    }
  }

  /// Closed → open with no shifts. An open day is left untouched.
  pub fn open(&mut self) {
    if let Self::Closed = self {
      *self = Self::Open {
        editing: false,
        shifts:  Vec::new(),
      };
    }
  }

  /// Close the day, dropping every shift.
  pub fn close(&mut self) { *self = Self::Closed; }

  pub fn begin_edit(&mut self) -> Result<()> {
    match self {
      Self::Closed => Err(Error::DayClosed),
      Self::Open { editing, .. } => {
        *editing = true;
        Ok(())
      }
    }
  }

  /// Leave editing mode if the shifts are valid. On failure the day stays in
  /// editing mode and the error lists every issue.
  pub fn finish_edit(&mut self) -> Result<()> {
    match self {
      Self::Closed => Err(Error::DayClosed),
      Self::Open { editing: false, .. } => Err(Error::NotEditing),
      Self::Open { editing, shifts } => {
        let issues = validator::diagnose(shifts);
        if !issues.is_empty() {
          return Err(Error::InvalidShifts(issues));
        }
        *editing = false;
        Ok(())
      }
    }
  }

  /// Append a draft shift at the suggested default hours.
  pub fn add_shift(&mut self) -> Result<ShiftId> {
    let shifts = self.editable()?;
    if shifts.len() >= MAX_SHIFTS_PER_DAY {
      return Err(Error::ShiftLimit {
        max: MAX_SHIFTS_PER_DAY,
      });
    }
    let (open, close) = validator::suggest_shift_times(shifts);
    let shift = Shift::new(open, close);
    shifts.push(shift);
    Ok(shift.id)
  }

  pub fn remove_shift(&mut self, id: ShiftId) -> Result<Shift> {
    let shifts = self.editable()?;
    let pos = shifts
      .iter()
      .position(|s| s.id == id)
      .ok_or(Error::ShiftNotFound(id))?;
    Ok(shifts.remove(pos))
  }

  pub fn set_hours(&mut self, id: ShiftId, open: u8, close: u8) -> Result<()> {
    let shift = self.shift_mut(id)?;
    shift.open = open;
    shift.close = close;
    Ok(())
  }

  pub fn set_active(&mut self, id: ShiftId, active: bool) -> Result<()> {
    self.shift_mut(id)?.active = active;
    Ok(())
  }

  /// A closed day is always valid; an open one must pass the validator.
  pub fn is_valid(&self) -> bool {
    match self {
      Self::Closed => true,
      Self::Open { shifts, .. } => validator::validate(shifts),
    }
  }

  pub fn issues(&self) -> Vec<ShiftIssue> {
    match self {
      Self::Closed => Vec::new(),
      Self::Open { shifts, .. } => validator::diagnose(shifts),
    }
  }

  fn editable(&mut self) -> Result<&mut Vec<Shift>> {
    match self {
      Self::Closed => Err(Error::DayClosed),
      Self::Open { editing: false, .. } => Err(Error::NotEditing),
      Self::Open { shifts, .. } => Ok(shifts),
    }
  }

  fn shift_mut(&mut self, id: ShiftId) -> Result<&mut Shift> {
    self
      .editable()?
      .iter_mut()
      .find(|s| s.id == id)
      .ok_or(Error::ShiftNotFound(id))
  }
}

// ─── WeeklySchedule ──────────────────────────────────────────────────────────

/// One [`DaySchedule`] per day, Sunday first. Every day starts closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
  days: [DaySchedule; Day::COUNT],
}

impl WeeklySchedule {
  pub fn new() -> Self { Self::default() }

  pub fn day(&self, day: Day) -> &DaySchedule { &self.days[day.index()] }

  pub fn day_mut(&mut self, day: Day) -> &mut DaySchedule {
    &mut self.days[day.index()]
  }

  pub fn iter(&self) -> impl Iterator<Item = (Day, &DaySchedule)> {
    Day::iter().zip(self.days.iter())
  }

  pub fn is_valid(&self) -> bool { self.days.iter().all(DaySchedule::is_valid) }

  /// Days whose shifts would be rejected, with their issues.
  pub fn invalid_days(&self) -> Vec<(Day, Vec<ShiftIssue>)> {
    self
      .iter()
      .map(|(day, schedule)| (day, schedule.issues()))
      .filter(|(_, issues)| !issues.is_empty())
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn editing_day() -> DaySchedule {
    let mut day = DaySchedule::Closed;
    day.open();
    day.begin_edit().unwrap();
    day
  }

  #[test]
  fn closed_day_is_valid_but_empty_open_day_is_not() {
    let mut day = DaySchedule::Closed;
    assert!(day.is_valid());
    day.open();
    assert!(!day.is_valid());
    assert_eq!(day.issues(), vec![ShiftIssue::Empty]);
  }

  #[test]
  fn add_shift_uses_suggestions() {
    let mut day = editing_day();
    day.add_shift().unwrap();
    day.add_shift().unwrap();
    let hours: Vec<(u8, u8)> =
      day.shifts().iter().map(|s| (s.open, s.close)).collect();
    assert_eq!(hours, vec![(8, 20), (20, 22)]);
    assert!(day.is_valid());
  }

  #[test]
  fn third_shift_is_refused() {
    let mut day = editing_day();
    day.add_shift().unwrap();
    day.add_shift().unwrap();
    assert!(matches!(day.add_shift(), Err(Error::ShiftLimit { max: 2 })));
  }

  #[test]
  fn mutations_require_editing() {
    let mut day = DaySchedule::Closed;
    assert!(matches!(day.add_shift(), Err(Error::DayClosed)));
    assert!(matches!(day.begin_edit(), Err(Error::DayClosed)));

    day.open();
    assert!(matches!(day.add_shift(), Err(Error::NotEditing)));
    assert!(matches!(day.finish_edit(), Err(Error::NotEditing)));
  }

  #[test]
  fn finish_edit_rejects_overlap_and_keeps_editing() {
    let mut day = editing_day();
    let first = day.add_shift().unwrap();
    let second = day.add_shift().unwrap();
    day.set_hours(second, 15, 22).unwrap();

    let err = day.finish_edit().unwrap_err();
    assert!(matches!(err, Error::InvalidShifts(ref issues) if issues.len() == 1));
    assert!(err.to_string().starts_with("Revisa las horas"));
    assert!(day.is_editing());

    day.set_hours(first, 8, 15).unwrap();
    day.finish_edit().unwrap();
    assert!(!day.is_editing());
  }

  #[test]
  fn inactive_shift_still_blocks_finish() {
    let mut day = editing_day();
    let first = day.add_shift().unwrap();
    let second = day.add_shift().unwrap();
    day.set_active(first, false).unwrap();
    day.set_hours(second, 10, 12).unwrap();
    assert!(matches!(day.finish_edit(), Err(Error::InvalidShifts(_))));
  }

  #[test]
  fn remove_unknown_shift_fails() {
    let mut day = editing_day();
    day.add_shift().unwrap();
    let missing = ShiftId::Saved(99);
    assert!(matches!(
      day.remove_shift(missing),
      Err(Error::ShiftNotFound(id)) if id == missing
    ));
  }

  #[test]
  fn remove_then_add_suggests_again() {
    let mut day = editing_day();
    let first = day.add_shift().unwrap();
    day.add_shift().unwrap();
    let removed = day.remove_shift(first).unwrap();
    assert_eq!((removed.open, removed.close), (8, 20));
    day.add_shift().unwrap();
    let hours: Vec<(u8, u8)> =
      day.shifts().iter().map(|s| (s.open, s.close)).collect();
    assert_eq!(hours, vec![(20, 22), (8, 20)]);
  }

  #[test]
  fn closing_discards_shifts() {
    let mut day = editing_day();
    day.add_shift().unwrap();
    day.close();
    assert_eq!(day, DaySchedule::Closed);
    day.open();
    assert!(day.shifts().is_empty());
    assert!(!day.is_editing());
  }

  #[test]
  fn opening_an_open_day_keeps_shifts() {
    let mut day = DaySchedule::open_with(vec![Shift::saved(1, 9, 17)]);
    day.open();
    assert_eq!(day.shifts().len(), 1);
  }

  #[test]
  fn weekly_schedule_reports_invalid_days() {
    let mut week = WeeklySchedule::new();
    assert!(week.is_valid());

    *week.day_mut(Day::Lunes) =
      DaySchedule::open_with(vec![Shift::new(8, 20), Shift::new(15, 22)]);
    *week.day_mut(Day::Martes) = DaySchedule::open_with(vec![Shift::new(9, 17)]);
    week.day_mut(Day::Viernes).open();

    assert!(!week.is_valid());
    let invalid: Vec<Day> =
      week.invalid_days().into_iter().map(|(d, _)| d).collect();
    assert_eq!(invalid, vec![Day::Lunes, Day::Viernes]);
  }

  #[test]
  fn weekly_iter_is_sunday_first() {
    let week = WeeklySchedule::new();
    let days: Vec<Day> = week.iter().map(|(d, _)| d).collect();
    assert_eq!(days.first(), Some(&Day::Domingo));
    assert_eq!(days.last(), Some(&Day::Sabado));
  }
}
