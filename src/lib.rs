//! Facade crate for the Courier delivery sequencing engine.
//!
//! This crate re-exports the core domain types and exposes the greedy
//! sequencer behind a feature flag.

#![forbid(unsafe_code)]

pub use courier_core::{
    ConstantSpeed, DEFAULT_AVERAGE_SPEED_KMH, EARTH_RADIUS_KM, GeodesicTravelModel, Haversine,
    Leg, Location, RouteBuilder, RouteResult, Segment, SolveError, SolveRequest,
    SolveRequestValidationError, Sequencer, TravelModel, TravelModelConfig, TravelModelError,
};

#[cfg(feature = "solver-greedy")]
pub use courier_solver_greedy::{NearestNeighbourSequencer, solve};
