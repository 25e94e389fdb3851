//! The `VenueDirectory` trait: where nearby searches get their venues from.
//!
//! The geo filter itself is pure; a directory only supplies its input. Higher
//! layers (`billar-api`) depend on this abstraction, not on a concrete source.

use std::{convert::Infallible, future::Future};

use crate::geo::VenueLocation;

/// Abstraction over a source of venues.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait VenueDirectory: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every venue known to the directory, in a stable order.
  fn list_venues(
    &self,
  ) -> impl Future<Output = Result<Vec<VenueLocation>, Self::Error>> + Send + '_;
}

/// A fixed, in-memory list of venues.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
  venues: Vec<VenueLocation>,
}

impl StaticDirectory {
  pub fn new(venues: Vec<VenueLocation>) -> Self { Self { venues } }

  pub fn len(&self) -> usize { self.venues.len() }

  pub fn is_empty(&self) -> bool { self.venues.is_empty() }
}

impl VenueDirectory for StaticDirectory {
  type Error = Infallible;

  fn list_venues(
    &self,
  ) -> impl Future<Output = Result<Vec<VenueLocation>, Self::Error>> + Send + '_
  {
    let venues = self.venues.clone();
    async move { Ok(venues) }
  }
}
