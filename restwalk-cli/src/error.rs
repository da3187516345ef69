//! Error types emitted by the restwalk CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use restwalk_core::{PlanRequestError, RoutingError};
use restwalk_data::generation::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the restwalk CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The merged options do not form a valid plan request.
    #[error("invalid plan request: {0}")]
    InvalidRequest(#[from] PlanRequestError),
    /// Constructing the route generator failed.
    #[error("failed to build route generator for {base_url:?}: {source}")]
    BuildGenerator {
        base_url: String,
        #[source]
        source: ProviderBuildError,
    },
    /// The planner produced no routes.
    #[error("{0}")]
    Plan(#[source] Box<RoutingError>),
    /// Serializing the map view failed.
    #[error("failed to serialize map view: {0}")]
    SerializeMapView(#[source] serde_json::Error),
    /// Writing the map view to stdout failed.
    #[error("failed to write map view: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Creating or writing the output file failed.
    #[error("failed to write map view to {path:?}: {source}")]
    WriteOutputFile {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<RoutingError> for CliError {
    fn from(err: RoutingError) -> Self {
        Self::Plan(Box::new(err))
    }
}
