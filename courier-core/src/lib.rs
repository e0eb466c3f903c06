//! Core domain types for the Courier delivery sequencing engine.
//!
//! The crate models a single vehicle leaving an origin and visiting a set of
//! drop-off points. It provides the geodesic distance model, the
//! constant-speed time model, the route value objects, request validation and
//! the [`Sequencer`] trait that concrete visiting-order strategies implement.
//!
//! # Examples
//!
//! ```
//! use courier_core::{GeodesicTravelModel, Location, TravelModel};
//!
//! let store = Location::new("store", 0.0, 0.0);
//! let customer = Location::new("c1", 0.0, 1.0);
//! let leg = GeodesicTravelModel::default().leg(&store, &customer);
//! assert!((leg.distance_km - 111.19).abs() < 0.01);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod geodesy;
mod location;
mod request;
mod route;
mod sequencer;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod travel_time;

pub use geodesy::{EARTH_RADIUS_KM, Haversine};
pub use location::Location;
pub use request::{SolveRequest, SolveRequestValidationError};
pub use route::{RouteBuilder, RouteResult, Segment};
pub use sequencer::{SolveError, Sequencer};
pub use travel_time::{
    ConstantSpeed, DEFAULT_AVERAGE_SPEED_KMH, GeodesicTravelModel, Leg, TravelModel,
    TravelModelConfig, TravelModelError,
};
