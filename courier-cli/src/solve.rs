//! Solve command implementation for the Courier CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use courier_core::{RouteResult, Sequencer, SolveRequest, TravelModelConfig};
use courier_fs::{create_utf8_file, file_is_file, open_utf8_file};
use courier_solver_greedy::NearestNeighbourSequencer;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_SOLVE_AVERAGE_SPEED, ARG_SOLVE_EARTH_RADIUS, ARG_SOLVE_OUTPUT, ARG_SOLVE_REQUEST,
    CliError, ENV_SOLVE_REQUEST,
};

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Sequence a delivery round described by a JSON request \
                 holding an origin and its destinations. The route is \
                 built greedily, always driving to the closest unvisited \
                 destination, and written as JSON.",
    about = "Sequence a delivery round"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file containing a solve request.
    #[arg(value_name = ARG_SOLVE_REQUEST)]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Average vehicle speed in kilometres per hour (default 30).
    #[arg(long = ARG_SOLVE_AVERAGE_SPEED, value_name = "kmh")]
    #[serde(default)]
    pub(crate) average_speed_kmh: Option<f64>,
    /// Earth radius in kilometres used for distances (default 6371).
    #[arg(long = ARG_SOLVE_EARTH_RADIUS, value_name = "km")]
    #[serde(default)]
    pub(crate) earth_radius_km: Option<f64>,
    /// Write the route to this file instead of stdout.
    #[arg(long = ARG_SOLVE_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SolveConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Speed and Earth radius for the travel model.
    pub(crate) travel_model: TravelModelConfig,
    /// Destination file; `None` writes to stdout.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match file_is_file(&self.request_path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_SOLVE_REQUEST,
                path: self.request_path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_SOLVE_REQUEST,
                    path: self.request_path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_SOLVE_REQUEST,
                path: self.request_path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SOLVE_REQUEST,
            env: ENV_SOLVE_REQUEST,
        })?;

        let defaults = TravelModelConfig::default();
        let travel_model = TravelModelConfig {
            average_speed_kmh: args.average_speed_kmh.unwrap_or(defaults.average_speed_kmh),
            earth_radius_km: args.earth_radius_km.unwrap_or(defaults.earth_radius_km),
        };

        Ok(Self {
            request_path,
            travel_model,
            output: args.output,
        })
    }
}

/// Builds a sequencer for the current solve invocation.
pub(crate) trait SequencerBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Sequencer>, CliError>;
}

pub(crate) struct DefaultSequencerBuilder;

impl SequencerBuilder for DefaultSequencerBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Sequencer>, CliError> {
        let sequencer = NearestNeighbourSequencer::from_config(&config.travel_model)?;
        Ok(Box::new(sequencer))
    }
}

pub(crate) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_solve_with(args, &DefaultSequencerBuilder, &mut stdout)
}

/// Resolve `args`, sequence the request and write the route to the
/// configured output, falling back to `stdout`.
pub(crate) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SequencerBuilder,
    stdout: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    let route = execute_solve(&config, builder)?;
    match &config.output {
        Some(path) => {
            let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            write_route(&mut file, &route)
        }
        None => write_route(stdout, &route),
    }
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_solve(
    config: &SolveConfig,
    builder: &dyn SequencerBuilder,
) -> Result<RouteResult, CliError> {
    let request = load_solve_request(&config.request_path)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidSolveRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let sequencer = builder.build(config)?;
    let route = sequencer
        .solve(&request)
        .map_err(|source| CliError::Solve { source })?;
    log::info!(
        "sequenced {} destinations from {:?}: {:.3} km, {:.1} min",
        route.stop_count(),
        request.origin.id(),
        route.total_distance_km(),
        route.total_time_minutes()
    );
    Ok(route)
}

/// Loads a JSON-encoded [`SolveRequest`] from disk.
pub(crate) fn load_solve_request(path: &Utf8Path) -> Result<SolveRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenSolveRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseSolveRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_route(writer: &mut dyn Write, route: &RouteResult) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(route).map_err(CliError::SerializeRoute)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    writer.flush().map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
