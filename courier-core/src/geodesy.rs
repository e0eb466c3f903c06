//! Great-circle distance on a spherical Earth.
//!
//! [`Haversine`] measures the shortest surface distance between two WGS84
//! coordinates. The sphere radius is bound when the model is built so several
//! configurations can coexist in one process.

use geo::Coord;

use crate::travel_time::TravelModelError;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance model.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use courier_core::Haversine;
///
/// let model = Haversine::default();
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let one_degree_east = Coord { x: 1.0, y: 0.0 };
/// let distance = model.distance_km(origin, one_degree_east);
/// assert!((distance - 111.195).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    radius_km: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self::new(EARTH_RADIUS_KM)
    }
}

impl Haversine {
    /// Construct a model for a sphere of `radius_km` without validation.
    #[must_use]
    pub const fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    /// Construct a model, rejecting non-finite or non-positive radii.
    ///
    /// # Examples
    /// ```
    /// use courier_core::{Haversine, TravelModelError};
    ///
    /// assert!(Haversine::try_new(6371.0).is_ok());
    /// assert!(matches!(
    ///     Haversine::try_new(0.0),
    ///     Err(TravelModelError::InvalidEarthRadius { .. })
    /// ));
    /// ```
    pub fn try_new(radius_km: f64) -> Result<Self, TravelModelError> {
        if radius_km.is_finite() && radius_km > 0.0 {
            Ok(Self::new(radius_km))
        } else {
            Err(TravelModelError::InvalidEarthRadius { radius_km })
        }
    }

    /// Sphere radius in kilometres.
    #[must_use]
    pub const fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Distance in kilometres between two coordinates (`x = lon`, `y = lat`).
    ///
    /// The intermediate haversine term is clamped into `[0, 1]` so identical
    /// and antipodal points never produce `NaN`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the haversine formula is floating-point trigonometry"
    )]
    pub fn distance_km(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        let from_lat = from.y.to_radians();
        let to_lat = to.y.to_radians();
        let delta_lat = to_lat - from_lat;
        let delta_lon = (to.x - from.x).to_radians();

        let half_chord = (delta_lat / 2.0).sin().powi(2)
            + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2);
        let a = half_chord.clamp(0.0, 1.0);
        let central_angle = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        self.radius_km * central_angle
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
    use std::f64::consts::PI;

    fn coord(lat: f64, lon: f64) -> Coord<f64> {
        Coord { x: lon, y: lat }
    }

    #[rstest]
    #[case(coord(0.0, 0.0))]
    #[case(coord(51.5, -0.12))]
    #[case(coord(-89.9, 179.9))]
    fn identical_points_are_zero_apart(#[case] point: Coord<f64>) {
        let distance = Haversine::default().distance_km(point, point);
        assert!(distance.abs() < 1e-9, "distance was {distance}");
    }

    #[rstest]
    fn one_degree_of_longitude_at_equator() {
        let distance = Haversine::default().distance_km(coord(0.0, 0.0), coord(0.0, 1.0));
        assert!((distance - 111.194_926_6).abs() < 1e-6, "distance was {distance}");
    }

    #[rstest]
    #[case(coord(0.0, 0.0), coord(0.0, 180.0))]
    #[case(coord(90.0, 0.0), coord(-90.0, 0.0))]
    #[case(coord(45.0, 30.0), coord(-45.0, -150.0))]
    fn antipodal_points_are_half_circumference(#[case] from: Coord<f64>, #[case] to: Coord<f64>) {
        let distance = Haversine::default().distance_km(from, to);
        assert!(!distance.is_nan());
        assert!((distance - PI * EARTH_RADIUS_KM).abs() < 1e-3, "distance was {distance}");
    }

    #[rstest]
    fn london_to_paris_matches_reference() {
        let london = coord(51.5074, -0.1278);
        let paris = coord(48.8566, 2.3522);
        let distance = Haversine::default().distance_km(london, paris);
        assert!((distance - 343.5).abs() < 1.0, "distance was {distance}");
    }

    #[rstest]
    fn distance_scales_with_radius() {
        let unit = Haversine::new(1.0).distance_km(coord(0.0, 0.0), coord(0.0, 90.0));
        assert!((unit - PI / 2.0).abs() < 1e-12);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_radius(#[case] radius_km: f64) {
        let err = Haversine::try_new(radius_km).expect_err("radius should be rejected");
        assert!(matches!(err, TravelModelError::InvalidEarthRadius { .. }));
    }
}
