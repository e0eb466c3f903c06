//! Greedy nearest-neighbour sequencing for Courier.
//!
//! This crate provides [`NearestNeighbourSequencer`], the default
//! implementation of the [`Sequencer`](courier_core::Sequencer) trait. Starting
//! at the origin it repeatedly drives to the closest unvisited destination,
//! measured in travel time, until every destination has been visited.
//!
//! The heuristic runs in `O(n²)` for `n` destinations and does not promise the
//! shortest possible tour. Exact ties are broken by the lexicographically
//! smallest destination id, so identical input always yields an identical
//! route.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod sequencer;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

use courier_core::{Location, RouteResult, Sequencer as _};

pub use sequencer::NearestNeighbourSequencer;

/// Sequence `destinations` from `origin` with the default geodesic model
/// (30 km/h on a 6371 km sphere).
///
/// # Examples
/// ```
/// use courier_core::Location;
/// use courier_solver_greedy::solve;
///
/// let origin = Location::new("store", 0.0, 0.0);
/// let destinations = [Location::new("far", 0.0, 5.0), Location::new("near", 0.0, 1.0)];
/// let route = solve(&origin, &destinations);
/// assert_eq!(route.sequence(), ["store", "near", "far"]);
/// ```
#[must_use]
pub fn solve(origin: &Location, destinations: &[Location]) -> RouteResult {
    NearestNeighbourSequencer::new().sequence(origin, destinations)
}
