//! Walking routes and their rest stops.
//!
//! Routes are created once from a validated generator response and never
//! mutated afterwards.

use thiserror::Error;

use crate::LatLng;

/// A suggested stopping point along a route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RestStop {
    /// Human-readable name, e.g. a park bench or a cafe.
    pub name: String,
    /// Distance from the previous point (origin or prior stop) in km.
    ///
    /// This is incremental, never cumulative from the origin.
    pub distance_from_previous_km: f64,
    /// Where the stop is.
    pub location: LatLng,
}

/// One walkable path between an origin and a destination.
///
/// When `path` holds at least two points the first is the origin and the
/// last is the destination. `rest_stops` are in travel order.
///
/// # Examples
/// ```
/// use restwalk_core::{LatLng, Route};
///
/// let route = Route::new(
///     "Harbourfront promenade",
///     2.4,
///     vec![
///         LatLng { lat: 22.2870, lng: 114.1590 },
///         LatLng { lat: 22.2820, lng: 114.1840 },
///     ],
///     Vec::new(),
/// );
/// assert_eq!(route.origin(), Some(LatLng { lat: 22.2870, lng: 114.1590 }));
/// assert_eq!(route.destination(), Some(LatLng { lat: 22.2820, lng: 114.1840 }));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Route {
    /// Descriptive name, e.g. "Via Victoria Park".
    pub route_name: String,
    /// Total walking distance in km.
    pub total_distance_km: f64,
    /// Ordered coordinates of the walking path.
    pub path: Vec<LatLng>,
    /// Suggested rest stops in travel order.
    pub rest_stops: Vec<RestStop>,
}

impl Route {
    /// Construct a route from its parts.
    pub fn new(
        route_name: impl Into<String>,
        total_distance_km: f64,
        path: Vec<LatLng>,
        rest_stops: Vec<RestStop>,
    ) -> Self {
        Self {
            route_name: route_name.into(),
            total_distance_km,
            path,
            rest_stops,
        }
    }

    /// First path point, if any.
    #[must_use]
    pub fn origin(&self) -> Option<LatLng> {
        self.path.first().copied()
    }

    /// Last path point, only when the path has at least two points.
    #[must_use]
    pub fn destination(&self) -> Option<LatLng> {
        match self.path.as_slice() {
            [_, .., last] => Some(*last),
            _ => None,
        }
    }
}

/// Errors returned by [`RouteCollection::new`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RouteCollectionError {
    /// No routes were supplied.
    #[error("route collection must contain at least one route")]
    Empty,
}

/// The ordered routes returned by one successful plan.
///
/// Always holds at least one route. Rendering assigns colours by ordinal
/// position, so the order is preserved exactly as received.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RouteCollection {
    routes: Vec<Route>,
}

impl RouteCollection {
    /// Validates and constructs a [`RouteCollection`].
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteCollectionError> {
        if routes.is_empty() {
            return Err(RouteCollectionError::Empty);
        }
        Ok(Self { routes })
    }

    /// Routes in the order the generator returned them.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate over the routes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    /// The first route.
    #[must_use]
    pub fn first(&self) -> Option<&Route> {
        self.routes.first()
    }

    /// Consume the collection, returning the routes.
    #[must_use]
    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }
}

impl AsRef<[Route]> for RouteCollection {
    fn as_ref(&self) -> &[Route] {
        &self.routes
    }
}

impl<'a> IntoIterator for &'a RouteCollection {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
