//! Days of the week as the backend names them.
//!
//! The week starts on Sunday (`DOMINGO`). Conversions to and from
//! [`chrono::Weekday`] are total, so no lookup ever depends on two arrays
//! staying aligned.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

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
  EnumCount,
  EnumIter,
  EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Day {
  Domingo,
  Lunes,
  Martes,
  Miercoles,
  Jueves,
  Viernes,
  Sabado,
}

impl Day {
  /// Position in a Sunday-first week, `0..7`.
  pub fn index(self) -> usize { self as usize }

  /// Human-readable Spanish name, for messages shown to owners.
  pub fn label(self) -> &'static str {
    match self {
      Self::Domingo => "Domingo",
      Self::Lunes => "Lunes",
      Self::Martes => "Martes",
      Self::Miercoles => "Miércoles",
      Self::Jueves => "Jueves",
      Self::Viernes => "Viernes",
      Self::Sabado => "Sábado",
    }
  }
}

impl From<Weekday> for Day {
  fn from(w: Weekday) -> Self {
    match w {
      Weekday::Sun => Self::Domingo,
      Weekday::Mon => Self::Lunes,
      Weekday::Tue => Self::Martes,
      Weekday::Wed => Self::Miercoles,
      Weekday::Thu => Self::Jueves,
      Weekday::Fri => Self::Viernes,
      Weekday::Sat => Self::Sabado,
    }
  }
}

impl From<Day> for Weekday {
  fn from(d: Day) -> Self {
    match d {
      Day::Domingo => Weekday::Sun,
      Day::Lunes => Weekday::Mon,
      Day::Martes => Weekday::Tue,
      Day::Miercoles => Weekday::Wed,
      Day::Jueves => Weekday::Thu,
      Day::Viernes => Weekday::Fri,
      Day::Sabado => Weekday::Sat,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn weekday_mapping_is_bijective() {
    for day in Day::iter() {
      let weekday: Weekday = day.into();
      assert_eq!(Day::from(weekday), day);
    }
  }

  #[test]
  fn week_starts_on_sunday() {
    let days: Vec<Day> = Day::iter().collect();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0], Day::Domingo);
    assert_eq!(Day::Sabado.index(), 6);
  }

  #[test]
  fn backend_keys() {
    assert_eq!(Day::Miercoles.to_string(), "MIERCOLES");
    assert_eq!(Day::from_str("SABADO").unwrap(), Day::Sabado);
    assert_eq!(Day::from_str("lunes").unwrap(), Day::Lunes);
    assert!(Day::from_str("MONDAY").is_err());
  }

  #[test]
  fn serde_uses_backend_keys() {
    let json = serde_json::to_string(&Day::Viernes).unwrap();
    assert_eq!(json, "\"VIERNES\"");
    let back: Day = serde_json::from_str("\"DOMINGO\"").unwrap();
    assert_eq!(back, Day::Domingo);
  }

  #[test]
  fn index_matches_chrono_sunday_offset() {
    for day in Day::iter() {
      let weekday: Weekday = day.into();
      assert_eq!(weekday.num_days_from_sunday() as usize, day.index());
    }
  }
}
