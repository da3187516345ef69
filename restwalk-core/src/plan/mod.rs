//! Turn a plan request into validated routes.
//!
//! [`RoutePlanner`] composes an instruction, asks a [`RouteGenerator`] for
//! JSON conforming to [`route_collection_schema`], and validates the reply
//! in full before returning anything. There is no retry loop: each failure
//! is returned to the caller, who may call [`RoutePlanner::plan`] again.

mod error;
mod prompt;
mod request;
mod schema;

pub use error::{RoutingError, RoutingErrorKind};
pub use prompt::{DEFAULT_REGION, REQUESTED_ROUTES, compose_instruction};
pub use request::{
    DEFAULT_REST_INTERVAL_KM, MAX_REST_INTERVAL_KM, MIN_REST_INTERVAL_KM, PlanRequest,
    PlanRequestError,
};
pub use schema::route_collection_schema;

use log::{debug, error, info, warn};
use serde_json::Value;

use crate::{Route, RouteCollection, RouteGenerator};

/// Plans walking routes by delegating to a [`RouteGenerator`].
///
/// The planner holds no per-request state, so one instance may serve
/// concurrent calls if the generator allows it.
///
/// # Examples
/// ```
/// use restwalk_core::{GenerationError, PlanRequest, RouteGenerator, RoutePlanner};
/// use serde_json::Value;
///
/// struct OneRoute;
///
/// impl RouteGenerator for OneRoute {
///     fn generate(&self, _: &str, _: &Value) -> Result<String, GenerationError> {
///         Ok(r#"[{"routeName":"Harbourfront","totalDistanceKm":2.0,
///                 "path":[{"lat":22.287,"lng":114.159},{"lat":22.282,"lng":114.184}],
///                 "restStops":[]}]"#
///             .to_owned())
///     }
/// }
///
/// let planner = RoutePlanner::new(OneRoute);
/// let request = PlanRequest::new("Central Pier", "Victoria Park", 1.5)?;
/// let routes = planner.plan(&request)?;
/// assert_eq!(routes.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct RoutePlanner<G> {
    generator: G,
    region: String,
    schema: Value,
}

impl<G: RouteGenerator> RoutePlanner<G> {
    /// Create a planner for the default region.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            region: DEFAULT_REGION.to_owned(),
            schema: route_collection_schema(),
        }
    }

    /// Set the region the instruction is written for.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Region the instruction is written for.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Borrow the underlying generator.
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// Request routes for `request` and validate the response.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::TransportFailure`] when the generator fails,
    /// and the remaining variants when the response is empty, not JSON, not
    /// a non-empty array, or contains an invalid route.
    pub fn plan(&self, request: &PlanRequest) -> Result<RouteCollection, RoutingError> {
        let instruction = compose_instruction(request, &self.region);
        debug!(
            "requesting routes from {:?} to {:?} (rest every {} km)",
            request.origin(),
            request.destination(),
            request.rest_interval_km()
        );
        let raw = self.generator.generate(&instruction, &self.schema)?;
        let routes = parse_routes(&raw)?;
        info!(
            "planned {} route(s) from {:?} to {:?}",
            routes.len(),
            request.origin(),
            request.destination()
        );
        Ok(routes)
    }
}

/// Validate raw generator text into a [`RouteCollection`].
///
/// Every route is validated before any is returned.
///
/// # Errors
///
/// See [`RoutePlanner::plan`]; this never returns
/// [`RoutingError::TransportFailure`].
pub fn parse_routes(raw: &str) -> Result<RouteCollection, RoutingError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(RoutingError::EmptyResponse);
    }
    let value: Value = serde_json::from_str(text).map_err(|source| {
        error!("route service returned invalid JSON ({source}); raw text: {raw}");
        RoutingError::MalformedResponse {
            source,
            raw: raw.to_owned(),
        }
    })?;
    let Some(candidates) = value.as_array() else {
        return Err(RoutingError::NoRoutesFound);
    };
    let routes = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            Route::from_candidate(candidate).map_err(|defect| {
                warn!("rejecting route {index}: {defect}; candidate: {candidate}");
                RoutingError::IncompleteRouteData { index, defect }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    RouteCollection::new(routes).map_err(|_| RoutingError::NoRoutesFound)
}
