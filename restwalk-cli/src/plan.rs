//! Plan command implementation for the restwalk CLI.

use std::io::Write;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use restwalk_core::plan::{DEFAULT_REGION, DEFAULT_REST_INTERVAL_KM};
use restwalk_core::{
    MapView, PlanRequest, RouteGenerator, RoutePlanner, ViewOptions, build_map_view,
};
use restwalk_data::generation::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, GeminiConfig, GeminiRouteGenerator,
};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_API_KEY, ARG_BASE_URL, ARG_DESTINATION, ARG_MODEL, ARG_ORIGIN, ARG_OUTPUT, ARG_REGION,
    ARG_REST_INTERVAL_KM, ARG_TIMEOUT_SECS, CliError, ENV_DESTINATION, ENV_ORIGIN,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Ask the route generation service for walking routes between \
                 two places, validate them, and print the derived map view \
                 (bounds, polylines, markers and directions links) as JSON.",
    about = "Plan walking routes with rest stops"
)]
#[ortho_config(prefix = "RESTWALK")]
pub(crate) struct PlanArgs {
    /// Where the walk starts, as free text.
    #[arg(long = ARG_ORIGIN, value_name = "place")]
    #[serde(default)]
    pub(crate) origin: Option<String>,
    /// Where the walk ends, as free text.
    #[arg(long = ARG_DESTINATION, value_name = "place")]
    #[serde(default)]
    pub(crate) destination: Option<String>,
    /// Desired spacing between rest stops in kilometres.
    #[arg(long = ARG_REST_INTERVAL_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) rest_interval_km: Option<f64>,
    /// Region named in the instruction (defaults to Hong Kong).
    #[arg(long = ARG_REGION, value_name = "name")]
    #[serde(default)]
    pub(crate) region: Option<String>,
    /// Generation model identifier.
    #[arg(long = ARG_MODEL, value_name = "id")]
    #[serde(default)]
    pub(crate) model: Option<String>,
    /// Base URL of the generation service.
    #[arg(long = ARG_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    /// API key for the generation service.
    #[arg(long = ARG_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    /// Request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Write the map view here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    pub(crate) origin: String,
    pub(crate) destination: String,
    pub(crate) rest_interval_km: f64,
    pub(crate) region: String,
    pub(crate) model: String,
    pub(crate) base_url: String,
    pub(crate) api_key: Option<String>,
    pub(crate) timeout: Duration,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanConfig {
    /// Generator settings derived from this configuration.
    pub(crate) fn generator_config(&self) -> GeminiConfig {
        let mut config = GeminiConfig::new(self.base_url.clone())
            .with_model(self.model.clone())
            .with_timeout(self.timeout);
        config.api_key.clone_from(&self.api_key);
        config
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let origin = args.origin.ok_or(CliError::MissingArgument {
            field: ARG_ORIGIN,
            env: ENV_ORIGIN,
        })?;
        let destination = args.destination.ok_or(CliError::MissingArgument {
            field: ARG_DESTINATION,
            env: ENV_DESTINATION,
        })?;

        Ok(Self {
            origin,
            destination,
            rest_interval_km: args.rest_interval_km.unwrap_or(DEFAULT_REST_INTERVAL_KM),
            region: args.region.unwrap_or_else(|| DEFAULT_REGION.to_owned()),
            model: args.model.unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            base_url: args.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            api_key: args.api_key,
            timeout: Duration::from_secs(args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            output: args.output,
        })
    }
}

/// Builds a route generator for the current plan invocation.
pub(super) trait PlanGeneratorBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn RouteGenerator>, CliError>;
}

pub(super) struct DefaultPlanGeneratorBuilder;

impl PlanGeneratorBuilder for DefaultPlanGeneratorBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn RouteGenerator>, CliError> {
        let generator =
            GeminiRouteGenerator::with_config(config.generator_config()).map_err(|source| {
                CliError::BuildGenerator {
                    base_url: config.base_url.clone(),
                    source,
                }
            })?;
        Ok(Box::new(generator))
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultPlanGeneratorBuilder;
    run_plan_with(args, &builder, &mut stdout)
}

pub(super) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn PlanGeneratorBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let view = execute_plan(&config, builder)?;
    match &config.output {
        Some(path) => write_map_view_file(path, &view),
        None => {
            let payload = render_map_view(&view)?;
            write_payload(writer, &payload).map_err(CliError::WriteOutput)
        }
    }
}

fn execute_plan(
    config: &PlanConfig,
    builder: &dyn PlanGeneratorBuilder,
) -> Result<MapView, CliError> {
    let request = PlanRequest::new(
        config.origin.as_str(),
        config.destination.as_str(),
        config.rest_interval_km,
    )?;
    let generator = builder.build(config)?;
    let planner = RoutePlanner::new(generator).with_region(config.region.as_str());
    let routes = planner.plan(&request)?;
    Ok(build_map_view(routes.routes(), &ViewOptions::default()))
}

fn write_map_view_file(path: &Utf8Path, view: &MapView) -> Result<(), CliError> {
    let to_file_error = |source| CliError::WriteOutputFile {
        path: path.to_path_buf(),
        source,
    };
    let payload = render_map_view(view)?;
    let mut file = restwalk_fs::create_utf8_file(path).map_err(to_file_error)?;
    write_payload(&mut file, &payload).map_err(to_file_error)?;
    info!("wrote map view to {path}");
    Ok(())
}

fn render_map_view(view: &MapView) -> Result<String, CliError> {
    serde_json::to_string_pretty(view).map_err(CliError::SerializeMapView)
}

fn write_payload(writer: &mut dyn Write, payload: &str) -> Result<(), std::io::Error> {
    writer.write_all(payload.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
