//! Core types and pure logic for the Billar venue tooling.
//!
//! This crate is deliberately free of HTTP, async runtime and wire-format
//! dependencies. It holds the shift validator used when an owner edits a
//! venue's weekly hours, and the geo filter used by venue discovery.

pub mod day;
pub mod directory;
pub mod error;
pub mod geo;
pub mod schedule;
pub mod shift;
pub mod validator;

pub use error::{Error, Result};
