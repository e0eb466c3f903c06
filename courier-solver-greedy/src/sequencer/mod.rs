//! `NearestNeighbourSequencer` implementation.

use std::cmp::Ordering;
use std::time::Instant;

use courier_core::{
    GeodesicTravelModel, Leg, Location, RouteBuilder, RouteResult, Sequencer, TravelModel,
    TravelModelConfig, TravelModelError,
};

/// Greedy sequencer that always drives to the closest unvisited destination.
///
/// Closeness is measured in travel time as priced by the wrapped
/// [`TravelModel`]. When several destinations are exactly as close, the one
/// with the lexicographically smallest id wins.
///
/// # Examples
/// ```
/// use courier_core::{Location, Sequencer};
/// use courier_solver_greedy::NearestNeighbourSequencer;
///
/// let sequencer = NearestNeighbourSequencer::new();
/// let origin = Location::new("store", 0.0, 0.0);
/// let destinations = [Location::new("c1", 0.0, 1.0)];
/// let route = sequencer.sequence(&origin, &destinations);
///
/// assert_eq!(route.sequence(), ["store", "c1"]);
/// assert!((route.total_time_minutes() - 222.38).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NearestNeighbourSequencer<M = GeodesicTravelModel> {
    model: M,
}

impl NearestNeighbourSequencer {
    /// Construct a sequencer using the default geodesic model.
    #[must_use]
    pub fn new() -> Self {
        Self::with_model(GeodesicTravelModel::default())
    }

    /// Construct a sequencer from validated travel-model parameters.
    ///
    /// # Examples
    /// ```
    /// use courier_core::TravelModelConfig;
    /// use courier_solver_greedy::NearestNeighbourSequencer;
    ///
    /// let config = TravelModelConfig { average_speed_kmh: 0.0, ..TravelModelConfig::default() };
    /// assert!(NearestNeighbourSequencer::from_config(&config).is_err());
    /// ```
    pub fn from_config(config: &TravelModelConfig) -> Result<Self, TravelModelError> {
        config.build().map(Self::with_model)
    }
}

impl<M: TravelModel> NearestNeighbourSequencer<M> {
    /// Construct a sequencer pricing hops with `model`.
    #[must_use]
    pub const fn with_model(model: M) -> Self {
        Self { model }
    }

    /// Travel model used to price hops.
    #[must_use]
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Pick the closest of `candidates` as seen from `from`.
    fn nearest<'a>(&self, from: &Location, candidates: &[&'a Location]) -> Option<Candidate<'a>> {
        candidates
            .iter()
            .copied()
            .enumerate()
            .map(|(index, location)| Candidate {
                index,
                location,
                leg: self.model.leg(from, location),
            })
            .min_by(Candidate::rank)
    }
}

impl<M> Sequencer for NearestNeighbourSequencer<M>
where
    M: TravelModel + Send + Sync,
{
    fn sequence(&self, origin: &Location, destinations: &[Location]) -> RouteResult {
        let mut builder = RouteBuilder::with_capacity(origin.id(), destinations.len());
        if destinations.is_empty() {
            return builder.finish();
        }

        let started_at = Instant::now();
        let mut unvisited: Vec<&Location> = destinations.iter().collect();
        let mut current = origin;
        while let Some(next) = self.nearest(current, &unvisited) {
            if !next.leg.time_minutes.is_finite() {
                log::warn!(
                    "travel time from {:?} to {:?} is not finite; ranking it last",
                    current.id(),
                    next.location.id()
                );
            }
            unvisited.swap_remove(next.index);
            builder.push_leg(next.location.id(), next.leg);
            current = next.location;
        }

        let route = builder.finish();
        log::debug!(
            "sequenced {} destinations from {:?} in {:?}: {:.3} km, {:.1} min",
            route.stop_count(),
            origin.id(),
            started_at.elapsed(),
            route.total_distance_km(),
            route.total_time_minutes()
        );
        route
    }
}

/// An unvisited destination priced from the current stop.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    index: usize,
    location: &'a Location,
    leg: Leg,
}

impl Candidate<'_> {
    /// Order by travel time, then by id. `NaN` times sort after every number.
    fn rank(lhs: &Self, rhs: &Self) -> Ordering {
        ranking_time(lhs.leg)
            .total_cmp(&ranking_time(rhs.leg))
            .then_with(|| lhs.location.id().cmp(rhs.location.id()))
    }
}

fn ranking_time(leg: Leg) -> f64 {
    if leg.time_minutes.is_nan() {
        f64::INFINITY
    } else {
        leg.time_minutes
    }
}

#[cfg(test)]
mod tests;
