//! Output schema sent to the route generation service.
//!
//! Uses the upper-case OpenAPI subset understood by Gemini's
//! `responseSchema`.

use serde_json::{Value, json};

fn lat_lng_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "lat": { "type": "NUMBER", "description": "Latitude in decimal degrees." },
            "lng": { "type": "NUMBER", "description": "Longitude in decimal degrees." }
        },
        "required": ["lat", "lng"]
    })
}

/// Schema for an array of routes, with every field required.
///
/// # Examples
/// ```
/// use restwalk_core::plan::route_collection_schema;
///
/// let schema = route_collection_schema();
/// assert_eq!(schema["type"], "ARRAY");
/// assert_eq!(schema["items"]["required"][3], "restStops");
/// ```
#[must_use]
pub fn route_collection_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "routeName": {
                    "type": "STRING",
                    "description": "Descriptive route name, e.g. \"Via Victoria Park\"."
                },
                "totalDistanceKm": {
                    "type": "NUMBER",
                    "description": "Total walking distance of the route in kilometres."
                },
                "path": {
                    "type": "ARRAY",
                    "description": "Latitude/longitude points tracing the walking path from origin to destination.",
                    "items": lat_lng_schema()
                },
                "restStops": {
                    "type": "ARRAY",
                    "description": "Suggested rest stops along the route, in walking order.",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": {
                                "type": "STRING",
                                "description": "Name or description of the stop, e.g. \"park bench\" or \"cafe\"."
                            },
                            "distanceFromPreviousKm": {
                                "type": "NUMBER",
                                "description": "Distance in kilometres from the previous point (origin or previous rest stop)."
                            },
                            "location": lat_lng_schema()
                        },
                        "required": ["name", "distanceFromPreviousKm", "location"]
                    }
                }
            },
            "required": ["routeName", "totalDistanceKm", "path", "restStops"]
        }
    })
}
