//! Convert distances into travel times and price legs between locations.
//!
//! [`ConstantSpeed`] turns kilometres into minutes at a fixed average speed.
//! The [`TravelModel`] trait combines a distance model with a time model and
//! yields a [`Leg`] for an ordered pair of [`Location`](crate::Location)
//! values. [`GeodesicTravelModel`] is the production implementation and can
//! be built from a validated [`TravelModelConfig`].

mod config;
mod error;
mod model;
mod speed;

pub use config::TravelModelConfig;
pub use error::TravelModelError;
pub use model::{GeodesicTravelModel, Leg, TravelModel};
pub use speed::{ConstantSpeed, DEFAULT_AVERAGE_SPEED_KMH};
