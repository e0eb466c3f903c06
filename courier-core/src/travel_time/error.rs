use thiserror::Error;

/// Errors raised while building distance and time models.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TravelModelError {
    /// The average speed was zero, negative or not finite.
    #[error("average speed must be a positive, finite number of km/h (got {speed_kmh})")]
    InvalidAverageSpeed {
        /// Rejected speed in km/h.
        speed_kmh: f64,
    },
    /// The sphere radius was zero, negative or not finite.
    #[error("earth radius must be a positive, finite number of km (got {radius_km})")]
    InvalidEarthRadius {
        /// Rejected radius in kilometres.
        radius_km: f64,
    },
}
