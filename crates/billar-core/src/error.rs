//! Error types for `billar-core`.

use thiserror::Error;

use crate::{shift::ShiftId, validator::ShiftIssue};

#[derive(Debug, Error)]
pub enum Error {
  #[error("the day is closed")]
  DayClosed,

  #[error("the day is not being edited")]
  NotEditing,

  #[error("a day holds at most {max} shifts")]
  ShiftLimit { max: usize },

  #[error("shift not found: {0}")]
  ShiftNotFound(ShiftId),

  #[error("{}", crate::validator::INVALID_HOURS_MESSAGE)]
  InvalidShifts(Vec<ShiftIssue>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
