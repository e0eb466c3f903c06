//! Helpers shared by the sequencer's unit, behaviour and golden tests.

use courier_core::Location;

/// A stop on the equator at `longitude` degrees east.
#[must_use]
pub fn equator_stop(id: &str, longitude: f64) -> Location {
    Location::new(id, 0.0, longitude)
}

/// Ids visited by `route`, origin first.
#[must_use]
pub fn visit_order(route: &courier_core::RouteResult) -> Vec<&str> {
    route.sequence().iter().map(String::as_str).collect()
}
