//! Constant-speed time model.

use super::error::TravelModelError;

/// Average delivery speed assumed when none is configured, in km/h.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 30.0;

/// Minutes per hour.
const MINUTES_PER_HOUR: f64 = 60.0;

/// Travel time at a fixed average speed.
///
/// # Examples
/// ```
/// use courier_core::ConstantSpeed;
///
/// let speed = ConstantSpeed::default();
/// assert_eq!(speed.minutes_for(15.0), 30.0);
/// assert_eq!(speed.minutes_for(0.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSpeed {
    speed_kmh: f64,
}

impl Default for ConstantSpeed {
    fn default() -> Self {
        Self::new(DEFAULT_AVERAGE_SPEED_KMH)
    }
}

impl ConstantSpeed {
    /// Construct a model travelling at `speed_kmh` without validation.
    #[must_use]
    pub const fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Construct a model, rejecting non-finite or non-positive speeds.
    pub fn try_new(speed_kmh: f64) -> Result<Self, TravelModelError> {
        if speed_kmh.is_finite() && speed_kmh > 0.0 {
            Ok(Self::new(speed_kmh))
        } else {
            Err(TravelModelError::InvalidAverageSpeed { speed_kmh })
        }
    }

    /// Average speed in km/h.
    #[must_use]
    pub const fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    /// Minutes needed to cover `distance_km`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "time is distance over speed in floating point"
    )]
    pub fn minutes_for(&self, distance_km: f64) -> f64 {
        distance_km / self.speed_kmh * MINUTES_PER_HOUR
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
    #[case(0.0, 0.0)]
    #[case(15.0, 30.0)]
    #[case(30.0, 60.0)]
    #[case(111.194_926_6, 222.389_853_2)]
    fn default_speed_converts_distance(#[case] distance_km: f64, #[case] minutes: f64) {
        let actual = ConstantSpeed::default().minutes_for(distance_km);
        assert!((actual - minutes).abs() < 1e-9, "expected {minutes}, got {actual}");
    }

    #[rstest]
    fn matches_closed_form_exactly() {
        let speed = ConstantSpeed::default();
        for distance in [0.5, 1.0, 7.25, 42.0, 1234.5] {
            assert_eq!(speed.minutes_for(distance), distance / 30.0 * 60.0);
        }
    }

    #[rstest]
    fn faster_vehicle_takes_less_time() {
        let bike = ConstantSpeed::new(15.0);
        let van = ConstantSpeed::new(45.0);
        assert!(van.minutes_for(10.0) < bike.minutes_for(10.0));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-30.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_speed(#[case] speed_kmh: f64) {
        let err = ConstantSpeed::try_new(speed_kmh).expect_err("speed should be rejected");
        assert!(matches!(err, TravelModelError::InvalidAverageSpeed { .. }));
    }
}
