//! Travel-model trait and the geodesic implementation.

use crate::Location;
use crate::geodesy::Haversine;

use super::speed::ConstantSpeed;

/// Cost of travelling from one location to the next.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Leg {
    /// Distance in kilometres.
    pub distance_km: f64,
    /// Travel time in minutes.
    pub time_minutes: f64,
}

/// Price the directed leg between two locations.
///
/// Implementations must be pure: the same pair always yields the same
/// [`Leg`], and a location priced against itself is free.
///
/// # Examples
///
/// ```rust
/// use courier_core::{Leg, Location, TravelModel};
///
/// struct UnitModel;
///
/// impl TravelModel for UnitModel {
///     fn leg(&self, from: &Location, to: &Location) -> Leg {
///         if from.id() == to.id() {
///             Leg::default()
///         } else {
///             Leg { distance_km: 1.0, time_minutes: 1.0 }
///         }
///     }
/// }
///
/// let a = Location::new("a", 0.0, 0.0);
/// let b = Location::new("b", 0.0, 1.0);
/// assert_eq!(UnitModel.leg(&a, &b).time_minutes, 1.0);
/// ```
pub trait TravelModel {
    /// Return the distance and time needed to travel from `from` to `to`.
    fn leg(&self, from: &Location, to: &Location) -> Leg;
}

/// Straight-line travel over a spherical Earth at a constant speed.
///
/// # Examples
/// ```
/// use courier_core::{ConstantSpeed, GeodesicTravelModel, Haversine, Location, TravelModel};
///
/// let model = GeodesicTravelModel::new(Haversine::default(), ConstantSpeed::new(60.0));
/// let leg = model.leg(&Location::new("a", 0.0, 0.0), &Location::new("b", 0.0, 1.0));
/// assert!((leg.time_minutes - leg.distance_km).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeodesicTravelModel {
    distance: Haversine,
    speed: ConstantSpeed,
}

impl GeodesicTravelModel {
    /// Combine a distance model and a time model.
    #[must_use]
    pub const fn new(distance: Haversine, speed: ConstantSpeed) -> Self {
        Self { distance, speed }
    }

    /// Distance model in use.
    #[must_use]
    pub const fn distance(&self) -> Haversine {
        self.distance
    }

    /// Time model in use.
    #[must_use]
    pub const fn speed(&self) -> ConstantSpeed {
        self.speed
    }
}

impl TravelModel for GeodesicTravelModel {
    fn leg(&self, from: &Location, to: &Location) -> Leg {
        let distance_km = self.distance.distance_km(from.coord(), to.coord());
        Leg {
            distance_km,
            time_minutes: self.speed.minutes_for(distance_km),
        }
    }
}

impl<M: TravelModel + ?Sized> TravelModel for &M {
    fn leg(&self, from: &Location, to: &Location) -> Leg {
        (**self).leg(from, to)
    }
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating-point results within a tolerance"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn leg_to_self_is_free() {
        let store = Location::new("store", 12.0, 77.6);
        let leg = GeodesicTravelModel::default().leg(&store, &store);
        assert_eq!(leg, Leg::default());
    }

    #[rstest]
    fn default_model_prices_one_degree_at_thirty_kmh() {
        let leg = GeodesicTravelModel::default()
            .leg(&Location::new("store", 0.0, 0.0), &Location::new("c1", 0.0, 1.0));
        assert!((leg.distance_km - 111.19).abs() < 0.01);
        assert!((leg.time_minutes - 222.38).abs() < 0.01);
    }

    #[rstest]
    fn legs_are_symmetric() {
        let model = GeodesicTravelModel::default();
        let a = Location::new("a", 12.97, 77.59);
        let b = Location::new("b", 13.08, 80.27);
        let there = model.leg(&a, &b);
        let back = model.leg(&b, &a);
        assert!((there.distance_km - back.distance_km).abs() < 1e-9);
        assert!((there.time_minutes - back.time_minutes).abs() < 1e-9);
    }
}
