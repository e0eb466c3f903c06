use geo::Coord;

/// A named stop on a delivery round: the origin or a drop-off point.
///
/// Coordinates are WGS84 degrees. Fields are private so a location cannot be
/// altered once built; range checks happen at the request boundary
/// ([`SolveRequest::validate`](crate::SolveRequest::validate)), not here.
///
/// # Examples
/// ```
/// use courier_core::Location;
///
/// let store = Location::new("store", 51.5, -0.12);
/// assert_eq!(store.id(), "store");
/// assert_eq!(store.coord().x, -0.12);
/// assert_eq!(store.coord().y, 51.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    id: String,
    #[cfg_attr(feature = "serde", serde(rename = "lat"))]
    latitude: f64,
    #[cfg_attr(feature = "serde", serde(rename = "lon"))]
    longitude: f64,
}

impl Location {
    /// Construct a location from an identifier and a latitude/longitude pair.
    #[must_use]
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
        }
    }

    /// Identifier, unique within one request.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Position as a `geo` coordinate with `x = longitude` and `y = latitude`.
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}
