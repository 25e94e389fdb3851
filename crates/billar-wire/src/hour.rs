//! Whole-hour `"HH:00"` strings.

use chrono::{NaiveTime, Timelike};

use billar_core::shift::LAST_HOUR;

use crate::{Error, Result};

/// Format an hour as `"HH:00"`.
pub fn encode_hour(hour: u8) -> Result<String> {
  if hour > LAST_HOUR {
    return Err(Error::HourOutOfRange(hour));
  }
  Ok(format!("{hour:02}:00"))
}

/// Parse `"HH:00"`, or `"HH:00:00"` as SQL `TIME` columns print it.
///
/// The hour must be zero-padded; any non-zero minute or second is rejected.
pub fn decode_hour(input: &str) -> Result<u8> {
  let format = match input.len() {
    5 => "%H:%M",
    8 => "%H:%M:%S",
    _ => return Err(Error::InvalidHour(input.to_owned())),
  };
  // Two digits per field with ':' between them. chrono alone would accept
  // "08: 0", since it skips spaces inside numeric fields.
  let laid_out = input.bytes().enumerate().all(|(i, b)| {
    if i % 3 == 2 { b == b':' } else { b.is_ascii_digit() }
  });
  if !laid_out {
    return Err(Error::InvalidHour(input.to_owned()));
  }
  let time = NaiveTime::parse_from_str(input, format)
    .map_err(|_| Error::InvalidHour(input.to_owned()))?;
  if time.minute() != 0 || time.second() != 0 {
    return Err(Error::NonWholeHour(input.to_owned()));
  }
  // NaiveTime::hour() is always below 24.
  Ok(time.hour() as u8)
}
