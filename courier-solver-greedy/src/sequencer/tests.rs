//! Unit tests for the nearest-neighbour sequencer.
#![expect(
    clippy::float_arithmetic,
    reason = "tests compare floating-point totals within a tolerance"
)]

use super::*;
use crate::test_support::{equator_stop, visit_order};
use courier_core::test_support::{UniformTravelModel, location};
use courier_core::{SolveError, SolveRequest, SolveRequestValidationError};
use rstest::{fixture, rstest};

const KM_PER_DEGREE: f64 = 111.194_926_6;

#[fixture]
fn sequencer() -> NearestNeighbourSequencer {
    NearestNeighbourSequencer::new()
}

#[fixture]
fn store() -> Location {
    location("store", 0.0, 0.0)
}

#[rstest]
fn empty_destinations_yield_origin_only(sequencer: NearestNeighbourSequencer, store: Location) {
    let route = sequencer.sequence(&store, &[]);
    assert_eq!(route, RouteResult::empty("store"));
}

#[rstest]
fn single_destination_is_one_degree_away(sequencer: NearestNeighbourSequencer, store: Location) {
    let route = sequencer.sequence(&store, &[equator_stop("c1", 1.0)]);

    assert_eq!(visit_order(&route), ["store", "c1"]);
    assert_eq!(route.stop_count(), 1);
    assert!((route.total_distance_km() - KM_PER_DEGREE).abs() < 1e-3);
    assert!((route.total_time_minutes() - 2.0 * KM_PER_DEGREE).abs() < 1e-3);
}

#[rstest]
fn visits_nearer_destination_first(sequencer: NearestNeighbourSequencer, store: Location) {
    let destinations = [equator_stop("far", 2.0), equator_stop("near", 1.0)];
    let route = sequencer.sequence(&store, &destinations);
    assert_eq!(visit_order(&route), ["store", "near", "far"]);
}

#[rstest]
fn doubles_back_when_the_far_side_is_closer(sequencer: NearestNeighbourSequencer, store: Location) {
    let destinations = [
        equator_stop("d", -5.0),
        equator_stop("c", 3.0),
        equator_stop("a", 1.0),
        equator_stop("b", 2.0),
    ];
    let route = sequencer.sequence(&store, &destinations);

    assert_eq!(visit_order(&route), ["store", "a", "b", "c", "d"]);
    assert!((route.total_distance_km() - 11.0 * KM_PER_DEGREE).abs() < 1e-2);
}

#[rstest]
#[case::sorted(vec!["a", "b", "c"])]
#[case::reversed(vec!["c", "b", "a"])]
#[case::shuffled(vec!["b", "c", "a"])]
fn equal_times_break_ties_by_id(store: Location, #[case] order: Vec<&str>) {
    let sequencer = NearestNeighbourSequencer::with_model(UniformTravelModel);
    let destinations: Vec<Location> = order
        .into_iter()
        .map(|id| location(id, 0.0, 0.0))
        .collect();

    let route = sequencer.sequence(&store, &destinations);

    assert_eq!(visit_order(&route), ["store", "a", "b", "c"]);
    assert_eq!(route.total_distance_km(), 3.0);
    assert_eq!(route.total_time_minutes(), 6.0);
}

#[rstest]
fn coincident_destinations_break_ties_by_id(
    sequencer: NearestNeighbourSequencer,
    store: Location,
) {
    let destinations = [equator_stop("twin-b", 1.0), equator_stop("twin-a", 1.0)];
    let route = sequencer.sequence(&store, &destinations);

    assert_eq!(visit_order(&route), ["store", "twin-a", "twin-b"]);
    let second = route.segments().get(1).expect("second hop");
    assert_eq!(second.distance_km(), 0.0);
    assert_eq!(second.time_minutes(), 0.0);
}

#[rstest]
fn segments_chain_from_origin(sequencer: NearestNeighbourSequencer, store: Location) {
    let destinations = [
        location("north", 0.5, 0.0),
        location("east", 0.0, 0.7),
        location("south", -0.9, 0.1),
    ];
    let route = sequencer.sequence(&store, &destinations);

    let mut previous = "store";
    for (segment, expected_to) in route.segments().iter().zip(route.sequence().iter().skip(1)) {
        assert_eq!(segment.from_id(), previous);
        assert_eq!(segment.to_id(), expected_to);
        previous = segment.to_id();
    }
}

#[rstest]
fn repeated_runs_serialise_identically(sequencer: NearestNeighbourSequencer, store: Location) {
    let destinations = [
        location("c3", 12.97, 77.61),
        location("c1", 12.98, 77.60),
        location("c2", 12.96, 77.58),
    ];
    let first = serde_json::to_string(&sequencer.sequence(&store, &destinations))
        .expect("route serialises");
    let mut shuffled = destinations.clone();
    shuffled.rotate_left(1);
    let second = serde_json::to_string(&sequencer.sequence(&store, &shuffled))
        .expect("route serialises");

    assert_eq!(first.as_bytes(), second.as_bytes());
    assert!(first.contains("\"optimal_sequence\":[\"store\""));
}

#[rstest]
fn faster_vehicle_halves_travel_time(store: Location) {
    let config = TravelModelConfig {
        average_speed_kmh: 60.0,
        ..TravelModelConfig::default()
    };
    let sequencer = NearestNeighbourSequencer::from_config(&config).expect("valid config");

    let route = sequencer.sequence(&store, &[equator_stop("c1", 1.0)]);

    assert!((route.total_time_minutes() - KM_PER_DEGREE).abs() < 1e-3);
    assert!((sequencer.model().speed().speed_kmh() - 60.0).abs() < f64::EPSILON);
}

#[rstest]
fn invalid_config_is_rejected() {
    let config = TravelModelConfig {
        earth_radius_km: -1.0,
        ..TravelModelConfig::default()
    };
    assert_eq!(
        NearestNeighbourSequencer::from_config(&config).map(|_| ()),
        Err(TravelModelError::InvalidEarthRadius { radius_km: -1.0 })
    );
}

#[rstest]
fn solve_validates_before_sequencing(sequencer: NearestNeighbourSequencer, store: Location) {
    let request = SolveRequest::new(store, vec![location("store", 0.0, 1.0)]);
    assert_eq!(
        sequencer.solve(&request),
        Err(SolveError::InvalidRequest(
            SolveRequestValidationError::DuplicateId {
                id: "store".to_owned()
            }
        ))
    );
}

#[rstest]
fn nan_times_rank_after_finite_times() {
    let nan = Leg {
        distance_km: f64::NAN,
        time_minutes: f64::NAN,
    };
    let finite = Leg {
        distance_km: 1_000.0,
        time_minutes: 2_000.0,
    };
    let a = location("a", 0.0, 0.0);
    let z = location("z", 0.0, 0.0);
    let lhs = Candidate {
        index: 0,
        location: &a,
        leg: nan,
    };
    let rhs = Candidate {
        index: 1,
        location: &z,
        leg: finite,
    };
    assert_eq!(Candidate::rank(&lhs, &rhs), Ordering::Greater);
}
