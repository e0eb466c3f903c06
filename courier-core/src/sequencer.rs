use thiserror::Error;

use crate::{Location, RouteResult, SolveRequest, SolveRequestValidationError};

/// Errors returned by [`Sequencer::solve`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The request failed boundary validation.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] SolveRequestValidationError),
    /// The strategy produced a route that breaks the route invariants.
    ///
    /// Details are logged; the message stays generic.
    #[error("internal error during route calculation")]
    Internal,
}

/// Choose the order in which a single vehicle visits its destinations.
///
/// Implementations provide [`Sequencer::sequence`] and may assume the input is
/// well formed (unique ids, in-range coordinates). Boundary code should call
/// [`Sequencer::solve`], which validates the request first and checks the
/// produced route before handing it back.
/// Sequencers must be `Send + Sync` so one instance can serve many threads.
///
/// # Examples
///
/// ```
/// use courier_core::{
///     GeodesicTravelModel, Location, RouteBuilder, RouteResult, Sequencer, SolveRequest,
///     TravelModel,
/// };
///
/// /// Visit destinations in the order they were given.
/// struct InputOrder;
///
/// impl Sequencer for InputOrder {
///     fn sequence(&self, origin: &Location, destinations: &[Location]) -> RouteResult {
///         let model = GeodesicTravelModel::default();
///         let mut builder = RouteBuilder::new(origin.id());
///         let mut current = origin;
///         for next in destinations {
///             builder.push_leg(next.id(), model.leg(current, next));
///             current = next;
///         }
///         builder.finish()
///     }
/// }
///
/// let request = SolveRequest::new(
///     Location::new("store", 0.0, 0.0),
///     vec![Location::new("c1", 0.0, 1.0)],
/// );
/// let route = InputOrder.solve(&request)?;
/// assert_eq!(route.sequence(), ["store", "c1"]);
/// # Ok::<(), courier_core::SolveError>(())
/// ```
pub trait Sequencer: Send + Sync {
    /// Produce a visiting order starting at `origin` and covering every
    /// destination exactly once. An empty `destinations` slice yields a route
    /// containing only the origin.
    fn sequence(&self, origin: &Location, destinations: &[Location]) -> RouteResult;

    /// Validate `request`, sequence it and verify the result.
    fn solve(&self, request: &SolveRequest) -> Result<RouteResult, SolveError> {
        request.validate()?;
        let route = self.sequence(&request.origin, &request.destinations);
        check_route(request, &route)?;
        Ok(route)
    }
}

fn check_route(request: &SolveRequest, route: &RouteResult) -> Result<(), SolveError> {
    let expected_stops = request.destinations.len();
    if route.stop_count() != expected_stops || route.sequence().len() != expected_stops + 1 {
        log::error!(
            "sequencer returned {} segments and {} ids for {} destinations",
            route.stop_count(),
            route.sequence().len(),
            expected_stops
        );
        return Err(SolveError::Internal);
    }
    if route.sequence().first().map(String::as_str) != Some(request.origin.id()) {
        log::error!(
            "sequencer route does not start at origin {:?}",
            request.origin.id()
        );
        return Err(SolveError::Internal);
    }
    let mut visited: Vec<&str> = route.sequence().iter().skip(1).map(String::as_str).collect();
    let mut expected: Vec<&str> = request.destinations.iter().map(Location::id).collect();
    visited.sort_unstable();
    expected.sort_unstable();
    if visited != expected {
        log::error!("sequencer visited {visited:?} but the destinations are {expected:?}");
        return Err(SolveError::Internal);
    }
    let totals = [route.total_distance_km(), route.total_time_minutes()];
    if totals.iter().any(|total| !total.is_finite() || *total < 0.0) {
        log::error!(
            "sequencer produced invalid totals: distance {} km, time {} min",
            route.total_distance_km(),
            route.total_time_minutes()
        );
        return Err(SolveError::Internal);
    }
    Ok(())
}
