//! Core domain types for the restwalk route planner.
//!
//! Routes arrive as untrusted JSON from an external generation service.
//! [`RoutePlanner`] validates them into the types defined here before
//! anything else sees them, and the [`view`] module derives plain-data
//! render state from validated routes.

#![forbid(unsafe_code)]

mod candidate;
mod coord;
mod generator;
pub mod geometry;
pub mod plan;
mod route;
pub mod session;
#[doc(hidden)]
pub mod test_support;
pub mod view;

pub use candidate::{DefectKind, ROOT_FIELD, RouteDefect};
pub use coord::{LatLng, LatLngError};
pub use generator::{GenerationError, RouteGenerator};
pub use geometry::{BoundingBox, compute_bounds};
pub use plan::{
    PlanRequest, PlanRequestError, RoutePlanner, RoutingError, RoutingErrorKind, parse_routes,
};
pub use route::{RestStop, Route, RouteCollection, RouteCollectionError};
pub use session::{PlanningSession, SessionState};
pub use view::{
    MapFrame, MapView, RoutePalette, RouteView, ViewOptions, build_map_view, directions_url,
    frame_view, render_metadata,
};
