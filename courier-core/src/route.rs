//! Ordered delivery routes.
//!
//! A [`RouteResult`] is the value produced by a [`Sequencer`](crate::Sequencer):
//! the hops travelled in order, the ids visited (origin first) and the running
//! totals. [`RouteBuilder`] assembles one hop at a time so that every segment
//! starts where the previous one ended and the totals always equal the sums
//! of the segments.

use crate::Leg;

/// One hop between consecutive stops.
///
/// # Examples
/// ```
/// use courier_core::Segment;
///
/// let segment = Segment::new("store", "c1", 1.5, 3.0);
/// assert_eq!(segment.from_id(), "store");
/// assert_eq!(segment.to_id(), "c1");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    from_id: String,
    to_id: String,
    distance_km: f64,
    time_minutes: f64,
}

impl Segment {
    /// Construct a segment between two location ids.
    #[must_use]
    pub fn new(
        from_id: impl Into<String>,
        to_id: impl Into<String>,
        distance_km: f64,
        time_minutes: f64,
    ) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
            distance_km,
            time_minutes,
        }
    }

    /// Identifier of the stop the hop leaves from.
    #[must_use]
    pub fn from_id(&self) -> &str {
        &self.from_id
    }

    /// Identifier of the stop the hop arrives at.
    #[must_use]
    pub fn to_id(&self) -> &str {
        &self.to_id
    }

    /// Great-circle distance in kilometres.
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Travel time in minutes.
    #[must_use]
    pub const fn time_minutes(&self) -> f64 {
        self.time_minutes
    }
}

/// A complete visiting order with per-hop costs and totals.
///
/// The serialised field names match the public wire format
/// (`optimized_route`, `total_time_minutes`, `total_distance_km`,
/// `optimal_sequence`).
///
/// # Examples
/// ```
/// use courier_core::RouteResult;
///
/// let route = RouteResult::empty("store");
/// assert!(route.segments().is_empty());
/// assert_eq!(route.sequence(), ["store"]);
/// assert_eq!(route.total_time_minutes(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResult {
    #[cfg_attr(feature = "serde", serde(rename = "optimized_route"))]
    segments: Vec<Segment>,
    total_time_minutes: f64,
    total_distance_km: f64,
    #[cfg_attr(feature = "serde", serde(rename = "optimal_sequence"))]
    sequence: Vec<String>,
}

impl RouteResult {
    /// A route that never leaves the origin.
    #[must_use]
    pub fn empty(origin_id: impl Into<String>) -> Self {
        RouteBuilder::new(origin_id).finish()
    }

    /// Hops in travel order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Visited ids, starting with the origin.
    #[must_use]
    pub fn sequence(&self) -> &[String] {
        &self.sequence
    }

    /// Sum of segment distances in kilometres.
    #[must_use]
    pub const fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Sum of segment times in minutes.
    #[must_use]
    pub const fn total_time_minutes(&self) -> f64 {
        self.total_time_minutes
    }

    /// Number of destinations visited.
    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.segments.len()
    }
}

/// Incrementally assemble a [`RouteResult`].
///
/// # Examples
/// ```
/// use courier_core::{Leg, RouteBuilder};
///
/// let mut builder = RouteBuilder::new("store");
/// builder.push_leg("c1", Leg { distance_km: 2.0, time_minutes: 4.0 });
/// builder.push_leg("c2", Leg { distance_km: 1.0, time_minutes: 2.0 });
/// let route = builder.finish();
///
/// assert_eq!(route.sequence(), ["store", "c1", "c2"]);
/// assert_eq!(route.segments()[1].from_id(), "c1");
/// assert_eq!(route.total_distance_km(), 3.0);
/// assert_eq!(route.total_time_minutes(), 6.0);
/// ```
#[derive(Debug, Clone)]
pub struct RouteBuilder {
    route: RouteResult,
}

impl RouteBuilder {
    /// Start a route at the origin.
    #[must_use]
    pub fn new(origin_id: impl Into<String>) -> Self {
        Self {
            route: RouteResult {
                segments: Vec::new(),
                total_time_minutes: 0.0,
                total_distance_km: 0.0,
                sequence: vec![origin_id.into()],
            },
        }
    }

    /// Start a route at the origin, reserving room for `stops` hops.
    #[must_use]
    pub fn with_capacity(origin_id: impl Into<String>, stops: usize) -> Self {
        let mut builder = Self::new(origin_id);
        builder.route.segments.reserve_exact(stops);
        builder.route.sequence.reserve_exact(stops);
        builder
    }

    /// Identifier of the stop the next hop will leave from.
    #[must_use]
    pub fn current_id(&self) -> &str {
        self.route
            .sequence
            .last()
            .map_or("", String::as_str)
    }

    /// Travel from the current stop to `to_id` at the cost of `leg`.
    #[expect(
        clippy::float_arithmetic,
        reason = "route totals accumulate floating-point leg costs"
    )]
    pub fn push_leg(&mut self, to_id: impl Into<String>, leg: Leg) -> &mut Self {
        let destination = to_id.into();
        let segment = Segment {
            from_id: self.current_id().to_owned(),
            to_id: destination.clone(),
            distance_km: leg.distance_km,
            time_minutes: leg.time_minutes,
        };
        self.route.total_distance_km += leg.distance_km;
        self.route.total_time_minutes += leg.time_minutes;
        self.route.segments.push(segment);
        self.route.sequence.push(destination);
        self
    }

    /// Finish the route.
    #[must_use]
    pub fn finish(self) -> RouteResult {
        self.route
    }
}
