//! Error types for the billar-wire codec.

use billar_core::day::Day;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid hour {0:?}, expected HH:00")]
  InvalidHour(String),

  #[error("hour {0:?} is not on a whole hour")]
  NonWholeHour(String),

  #[error("hour {0} is past 23")]
  HourOutOfRange(u8),

  #[error("{day}, shift {index}: {source}")]
  Shift {
    day:    Day,
    index:  usize,
    #[source]
    source: Box<Error>,
  },

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
