//! Handlers for `/schedules` endpoints.
//!
//! Both endpoints are stateless: the week or day under edit travels in the
//! request body, in the same wire format the backend stores.

use std::collections::BTreeMap;

use axum::Json;
use billar_core::{
  day::Day,
  schedule::DaySchedule,
  validator::{self, ShiftIssue},
};
use billar_wire::{WireShift, WireWeek, decode_shifts, decode_week, encode_hour};
use serde::{Deserialize, Serialize};

pub use billar_core::validator::INVALID_HOURS_MESSAGE;

use crate::error::ApiError;

// ─── Validate ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct IssueReport {
  #[serde(flatten)]
  pub issue:   ShiftIssue,
  pub message: String,
}

impl From<ShiftIssue> for IssueReport {
  fn from(issue: ShiftIssue) -> Self {
    Self {
      message: issue.to_string(),
      issue,
    }
  }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayReport {
  pub open:   bool,
  pub valid:  bool,
  pub issues: Vec<IssueReport>,
}

impl From<&DaySchedule> for DayReport {
  fn from(schedule: &DaySchedule) -> Self {
    let issues: Vec<IssueReport> =
      schedule.issues().into_iter().map(IssueReport::from).collect();
    Self {
      open: schedule.is_open(),
      valid: issues.is_empty(),
      issues,
    }
  }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeekReport {
  pub valid:   bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  pub days:    BTreeMap<Day, DayReport>,
}

/// `POST /schedules/validate` — body: a wire week.
///
/// Undecodable hours are a 400; decodable but invalid shifts are reported
/// per day with a 200.
pub async fn validate(
  Json(body): Json<WireWeek>,
) -> Result<Json<WeekReport>, ApiError> {
  let week = decode_week(&body)?;
  let days: BTreeMap<Day, DayReport> = week
    .iter()
    .map(|(day, schedule)| (day, DayReport::from(schedule)))
    .collect();
  let valid = days.values().all(|d| d.valid);

  tracing::debug!(valid, "validated weekly schedule");
  Ok(Json(WeekReport {
    valid,
    message: (!valid).then(|| INVALID_HOURS_MESSAGE.to_string()),
    days,
  }))
}

// ─── Suggest ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SuggestBody {
  #[serde(default)]
  pub shifts: Vec<WireShift>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
  pub hora_apertura: String,
  pub hora_cierre:   String,
}

/// `POST /schedules/suggest` — body: `{"shifts":[...]}`, the day's current
/// shifts.
pub async fn suggest(
  Json(body): Json<SuggestBody>,
) -> Result<Json<Suggestion>, ApiError> {
  let existing = decode_shifts(&body.shifts)?;
  let (open, close) = validator::suggest_shift_times(&existing);
  Ok(Json(Suggestion {
    hora_apertura: encode_hour(open)?,
    hora_cierre:   encode_hour(close)?,
  }))
}
