//! Test doubles and fixtures shared by unit and behaviour tests.

use std::cell::RefCell;

use serde_json::{Value, json};

use crate::{GenerationError, LatLng, RestStop, Route, RouteGenerator};

/// Deterministic `RouteGenerator` returning a canned reply.
///
/// Every call is recorded so tests can inspect the instruction and schema
/// the planner sent.
#[derive(Debug, Clone)]
pub struct StubRouteGenerator {
    reply: Result<String, GenerationError>,
    calls: RefCell<Vec<(String, Value)>>,
}

impl StubRouteGenerator {
    /// Create a generator that returns `text` for every call.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Create a generator that fails with `error` for every call.
    #[must_use]
    pub fn with_error(error: GenerationError) -> Self {
        Self {
            reply: Err(error),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Instructions and schemas received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }
}

impl RouteGenerator for StubRouteGenerator {
    fn generate(&self, instruction: &str, schema: &Value) -> Result<String, GenerationError> {
        self.calls
            .borrow_mut()
            .push((instruction.to_owned(), schema.clone()));
        self.reply.clone()
    }
}

/// JSON for a well-formed two-point route with `stops` rest stops.
///
/// Distances are non-integral so the value survives a serialise round trip
/// unchanged.
#[must_use]
pub fn route_json(name: &str, stops: usize) -> Value {
    let rest_stops: Vec<Value> = (0..stops)
        .map(|index| {
            json!({
                "name": format!("{name} stop {index}"),
                "distanceFromPreviousKm": 0.75,
                "location": { "lat": 22.2850, "lng": 114.1700 }
            })
        })
        .collect();
    json!({
        "routeName": name,
        "totalDistanceKm": 2.25,
        "path": [
            { "lat": 22.2870, "lng": 114.1590 },
            { "lat": 22.2820, "lng": 114.1840 }
        ],
        "restStops": rest_stops
    })
}

/// A route whose path is exactly `points`, with no rest stops.
#[must_use]
pub fn route_through(name: &str, points: &[(f64, f64)]) -> Route {
    Route::new(
        name,
        1.0,
        points
            .iter()
            .map(|&(lat, lng)| LatLng { lat, lng })
            .collect(),
        Vec::new(),
    )
}

/// A rest stop at `(lat, lng)` with the given incremental distance.
#[must_use]
pub fn rest_stop(name: &str, distance_from_previous_km: f64, lat: f64, lng: f64) -> RestStop {
    RestStop {
        name: name.to_owned(),
        distance_from_previous_km,
        location: LatLng { lat, lng },
    }
}
