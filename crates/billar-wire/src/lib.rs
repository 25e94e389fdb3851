//! Codec between [`billar_core`] types and the backend's JSON contract.
//!
//! Hours travel as `"HH:00"` strings, shift status as `ACTIVO`/`INACTIVO`,
//! and weeks as objects keyed `DOMINGO`…`SABADO`. Pure synchronous; no HTTP.
//!
//! # Quick start
//!
//! ```no_run
//! use billar_wire::week_from_json;
//!
//! let json = r#"{ "LUNES": [{ "hora_apertura": "08:00", "hora_cierre": "20:00", "estado": "ACTIVO" }] }"#;
//! let week = week_from_json(json).unwrap();
//! println!("valid: {}", week.is_valid());
//! ```

pub mod error;
pub mod hour;
pub mod schedule;
pub mod venue;

pub use error::{Error, Result};
pub use hour::{decode_hour, encode_hour};
pub use schedule::{
  ShiftStatus, WireShift, WireWeek, decode_shift, decode_shifts, decode_week,
  encode_shift, encode_week, week_from_json, week_to_json,
};
pub use venue::{WireVenue, decode_venues, encode_venue};
