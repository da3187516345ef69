//! Facade crate for the restwalk walking-route planner.
//!
//! This crate re-exports the core domain types and exposes the optional
//! Gemini-backed route generator behind a feature flag.
//!
//! # Example
//!
//! ```
//! use restwalk::{MapFrame, RouteCollection, RouteCollectionError, ViewOptions, frame_view};
//!
//! assert_eq!(RouteCollection::new(Vec::new()), Err(RouteCollectionError::Empty));
//! assert!(matches!(
//!     frame_view(&[], &ViewOptions::default()),
//!     MapFrame::Centre { zoom: 11, .. }
//! ));
//! ```

#![forbid(unsafe_code)]

pub use restwalk_core::{
    BoundingBox, DefectKind, GenerationError, LatLng, LatLngError, MapFrame, MapView,
    PlanRequest, PlanRequestError, PlanningSession, RestStop, Route, RouteCollection,
    RouteCollectionError, RouteDefect, RouteGenerator, RoutePalette, RoutePlanner, RouteView,
    RoutingError, RoutingErrorKind, SessionState, ViewOptions, build_map_view, compute_bounds,
    directions_url, frame_view, parse_routes, render_metadata,
};

#[cfg(feature = "generator-gemini")]
pub use restwalk_data::generation::{GeminiConfig, GeminiRouteGenerator};
