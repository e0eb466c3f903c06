//! Solve requests and boundary validation.
//!
//! Sequencers assume well-formed input. Callers run
//! [`SolveRequest::validate`] first so that empty rounds, duplicate ids and
//! out-of-range coordinates are rejected before any routing happens.

use std::collections::HashSet;
use std::iter;
use std::ops::RangeInclusive;

use thiserror::Error;

use crate::Location;

const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Parameters for a sequencing request.
///
/// The JSON form accepts `origin`/`destinations` as well as
/// `store_location`/`customer_locations`.
///
/// # Examples
/// ```
/// use courier_core::{Location, SolveRequest};
///
/// let request = SolveRequest {
///     origin: Location::new("store", 0.0, 0.0),
///     destinations: vec![Location::new("c1", 0.0, 1.0)],
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveRequest {
    /// Where the vehicle starts.
    #[cfg_attr(feature = "serde", serde(alias = "store_location"))]
    pub origin: Location,
    /// Drop-off points to visit.
    #[cfg_attr(feature = "serde", serde(alias = "customer_locations"))]
    pub destinations: Vec<Location>,
}

/// Reasons a [`SolveRequest`] is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveRequestValidationError {
    /// The request listed no destinations.
    #[error("at least one destination required")]
    NoDestinations,
    /// A latitude fell outside `[-90, 90]` or was not finite.
    #[error("latitude {latitude} of location {id:?} is outside [-90, 90]")]
    LatitudeOutOfRange {
        /// Offending location id.
        id: String,
        /// Rejected latitude.
        latitude: f64,
    },
    /// A longitude fell outside `[-180, 180]` or was not finite.
    #[error("longitude {longitude} of location {id:?} is outside [-180, 180]")]
    LongitudeOutOfRange {
        /// Offending location id.
        id: String,
        /// Rejected longitude.
        longitude: f64,
    },
    /// Two locations shared an id.
    #[error("location id {id:?} appears more than once")]
    DuplicateId {
        /// Repeated id.
        id: String,
    },
}

impl SolveRequest {
    /// Construct a request from an origin and its destinations.
    #[must_use]
    pub const fn new(origin: Location, destinations: Vec<Location>) -> Self {
        Self {
            origin,
            destinations,
        }
    }

    /// Check the request and report the first problem found.
    ///
    /// The destination list is checked for emptiness first. Locations are
    /// then checked one at a time, origin first and destinations in input
    /// order: latitude, longitude, then id uniqueness.
    ///
    /// # Examples
    /// ```
    /// use courier_core::{Location, SolveRequest, SolveRequestValidationError};
    ///
    /// let request = SolveRequest::new(Location::new("store", 0.0, 0.0), Vec::new());
    /// assert_eq!(request.validate(), Err(SolveRequestValidationError::NoDestinations));
    /// ```
    pub fn validate(&self) -> Result<(), SolveRequestValidationError> {
        if self.destinations.is_empty() {
            return Err(SolveRequestValidationError::NoDestinations);
        }

        let mut seen = HashSet::with_capacity(self.destinations.len() + 1);
        for location in self.locations() {
            check_coordinates(location)?;
            if !seen.insert(location.id()) {
                return Err(SolveRequestValidationError::DuplicateId {
                    id: location.id().to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Origin followed by the destinations in input order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        iter::once(&self.origin).chain(self.destinations.iter())
    }
}

fn check_coordinates(location: &Location) -> Result<(), SolveRequestValidationError> {
    if !LATITUDE_RANGE.contains(&location.latitude()) {
        return Err(SolveRequestValidationError::LatitudeOutOfRange {
            id: location.id().to_owned(),
            latitude: location.latitude(),
        });
    }
    if !LONGITUDE_RANGE.contains(&location.longitude()) {
        return Err(SolveRequestValidationError::LongitudeOutOfRange {
            id: location.id().to_owned(),
            longitude: location.longitude(),
        });
    }
    Ok(())
}
