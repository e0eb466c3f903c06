//! Configuration for the geodesic travel model.

use crate::geodesy::{EARTH_RADIUS_KM, Haversine};

use super::error::TravelModelError;
use super::model::GeodesicTravelModel;
use super::speed::{ConstantSpeed, DEFAULT_AVERAGE_SPEED_KMH};

/// Parameters for [`GeodesicTravelModel`].
///
/// # Examples
/// ```
/// use courier_core::TravelModelConfig;
///
/// let config = TravelModelConfig {
///     average_speed_kmh: 45.0,
///     ..TravelModelConfig::default()
/// };
/// let model = config.build()?;
/// assert_eq!(model.speed().speed_kmh(), 45.0);
/// # Ok::<(), courier_core::TravelModelError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelModelConfig {
    /// Average vehicle speed in km/h.
    pub average_speed_kmh: f64,
    /// Radius of the spherical Earth in kilometres.
    pub earth_radius_km: f64,
}

impl Default for TravelModelConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            earth_radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl TravelModelConfig {
    /// Validate the parameters and build the model.
    pub fn build(&self) -> Result<GeodesicTravelModel, TravelModelError> {
        let speed = ConstantSpeed::try_new(self.average_speed_kmh)?;
        let distance = Haversine::try_new(self.earth_radius_km)?;
        Ok(GeodesicTravelModel::new(distance, speed))
    }
}
