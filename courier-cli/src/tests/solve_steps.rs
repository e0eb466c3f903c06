//! Behaviour-driven step definitions driving the solve CLI scenarios.

use super::helpers::{Workspace, near_far_request, write_request, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use courier_core::{Location, RouteResult, SolveRequest, SolveRequestValidationError};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct SolveWorld {
    workspace: Workspace,
    request_path: Utf8PathBuf,
    output_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl SolveWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let request_path = workspace.path("request.json");
        let output_path = workspace.path("out/route.json");
        Self {
            workspace,
            request_path,
            output_path,
            include_request: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["courier".to_owned(), "solve".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn expect_error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }

    fn printed_route(&self) -> RouteResult {
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON route")
    }
}

#[fixture]
fn world() -> SolveWorld {
    SolveWorld::new()
}

#[given("a valid solve request exists on disk")]
fn valid_solve_request_exists(#[from(world)] world: &SolveWorld) {
    write_request(&world.request_path, &near_far_request());
}

#[given("the solve request contains invalid JSON")]
fn solve_request_contains_invalid_json(#[from(world)] world: &SolveWorld) {
    write_utf8(&world.request_path, b"{ not valid json");
}

#[given("the solve request lists no destinations")]
fn solve_request_lists_no_destinations(#[from(world)] world: &SolveWorld) {
    let request = SolveRequest::new(Location::new("store", 0.0, 0.0), Vec::new());
    write_request(&world.request_path, &request);
}

#[given("I omit the solve request path")]
fn omit_solve_request_path(#[from(world)] world: &SolveWorld) {
    *world.include_request.borrow_mut() = false;
}

#[given("I ask for the route to be written to a file")]
fn route_to_file(#[from(world)] world: &SolveWorld) {
    world.cli_args.borrow_mut().extend([
        format!("--{ARG_SOLVE_OUTPUT}"),
        world.output_path.as_str().to_owned(),
    ]);
}

#[given("I set the average speed to zero")]
fn zero_speed(#[from(world)] world: &SolveWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_SOLVE_AVERAGE_SPEED}"), "0".to_owned()]);
}

#[when("I run the solve command")]
fn run_solve_command(#[from(world)] world: &SolveWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Solve(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_solve_with(args, &DefaultSequencerBuilder, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints the route as JSON")]
fn command_succeeds_and_prints_json(#[from(world)] world: &SolveWorld) {
    if let Some(Err(err)) = world.result.borrow().as_ref() {
        panic!("expected success, found {err:?}");
    }
    let route = world.printed_route();
    assert_eq!(route.sequence(), ["store", "near", "far"]);
    assert_eq!(route.stop_count(), 2);
}

#[then("the route is written to the output file")]
fn route_written_to_file(#[from(world)] world: &SolveWorld) {
    if let Some(Err(err)) = world.result.borrow().as_ref() {
        panic!("expected success, found {err:?}");
    }
    assert!(world.stdout.borrow().is_empty());
    let text = std::fs::read_to_string(&world.output_path).expect("output file");
    let route: RouteResult = serde_json::from_str(&text).expect("route JSON");
    assert_eq!(route.sequence(), ["store", "near", "far"]);
    assert!(world.workspace.path("out").is_dir());
}

#[then("the command fails because the request JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &SolveWorld) {
    match &*world.expect_error() {
        CliError::ParseSolveRequest { .. } => {}
        other => panic!("expected ParseSolveRequest, found {other:?}"),
    }
}

#[then("the command fails because the request is invalid")]
fn command_fails_invalid_request(#[from(world)] world: &SolveWorld) {
    match &*world.expect_error() {
        CliError::InvalidSolveRequest { source, .. } => {
            assert_eq!(*source, SolveRequestValidationError::NoDestinations);
        }
        other => panic!("expected InvalidSolveRequest, found {other:?}"),
    }
}

#[then("the command fails because the request path is missing")]
fn command_fails_missing_request_path(#[from(world)] world: &SolveWorld) {
    match &*world.expect_error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_SOLVE_REQUEST),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the travel model is invalid")]
fn command_fails_invalid_travel_model(#[from(world)] world: &SolveWorld) {
    match &*world.expect_error() {
        CliError::InvalidTravelModel(_) => {}
        other => panic!("expected InvalidTravelModel, found {other:?}"),
    }
}

macro_rules! register_solve_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/solve_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: SolveWorld) {
            let _ = world;
        }
    };
}

register_solve_scenario!(solve_happy_path, "solving a request from JSON");
register_solve_scenario!(solve_to_output_file, "writing the route to an output file");
register_solve_scenario!(solve_invalid_json, "rejecting invalid JSON input");
register_solve_scenario!(solve_invalid_request, "rejecting requests without destinations");
register_solve_scenario!(solve_missing_request, "rejecting missing request paths");
register_solve_scenario!(solve_zero_speed, "rejecting a zero average speed");
