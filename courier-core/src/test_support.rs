//! Test-only travel models and sequencers used by unit and behaviour tests.

use crate::{Leg, Location, RouteBuilder, RouteResult, Sequencer, TravelModel};

/// Construct a [`Location`] from an id and a latitude/longitude pair.
#[must_use]
pub fn location(id: &str, latitude: f64, longitude: f64) -> Location {
    Location::new(id, latitude, longitude)
}

/// Deterministic `TravelModel` where every hop between distinct ids costs
/// one kilometre and two minutes.
///
/// All candidates are equidistant, which makes it useful for exercising
/// tie-break rules.
#[derive(Default, Debug, Copy, Clone)]
pub struct UniformTravelModel;

impl TravelModel for UniformTravelModel {
    fn leg(&self, from: &Location, to: &Location) -> Leg {
        if from.id() == to.id() {
            return Leg::default();
        }
        Leg {
            distance_km: 1.0,
            time_minutes: 2.0,
        }
    }
}

/// `Sequencer` that visits destinations in the order they were supplied.
#[derive(Default, Debug, Copy, Clone)]
pub struct InputOrderSequencer<M> {
    model: M,
}

impl<M: TravelModel> InputOrderSequencer<M> {
    /// Wrap `model` for pricing each hop.
    #[must_use]
    pub const fn new(model: M) -> Self {
        Self { model }
    }
}

impl<M> Sequencer for InputOrderSequencer<M>
where
    M: TravelModel + Send + Sync,
{
    fn sequence(&self, origin: &Location, destinations: &[Location]) -> RouteResult {
        let mut builder = RouteBuilder::with_capacity(origin.id(), destinations.len());
        let mut current = origin;
        for next in destinations {
            builder.push_leg(next.id(), self.model.leg(current, next));
            current = next;
        }
        builder.finish()
    }
}
