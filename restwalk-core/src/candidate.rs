//! Validation gate between untrusted generator JSON and [`Route`].
//!
//! Every field is type-checked before it is read. The first defect found
//! is reported with a JSON-style field path such as
//! `restStops[1].location.lat`.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::coord::{is_latitude, is_longitude};
use crate::{LatLng, RestStop, Route};

/// Path reported when the candidate itself is not an object.
pub const ROOT_FIELD: &str = "(route)";

/// What was wrong with a candidate field.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DefectKind {
    /// The value was not a JSON object.
    #[error("expected an object")]
    NotAnObject,
    /// A required field was absent.
    #[error("is missing")]
    Missing,
    /// The value was not a JSON string.
    #[error("expected a string")]
    NotAString,
    /// The value was not a JSON number.
    #[error("expected a number")]
    NotANumber,
    /// The value was not a JSON array.
    #[error("expected an array")]
    NotAnArray,
    /// A name was empty or whitespace.
    #[error("must not be blank")]
    Blank,
    /// A distance was below zero.
    #[error("must not be negative")]
    Negative,
    /// A latitude or longitude was outside its valid range.
    #[error("is outside the valid coordinate range")]
    OutOfRange,
}

/// The first defect found in a route candidate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field} {kind}")]
pub struct RouteDefect {
    /// JSON-style path to the offending field.
    pub field: String,
    /// What was wrong with it.
    pub kind: DefectKind,
}

impl RouteDefect {
    fn new(field: impl Into<String>, kind: DefectKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

impl Route {
    /// Validate an untrusted JSON value and convert it into a [`Route`].
    ///
    /// # Examples
    /// ```
    /// use restwalk_core::{DefectKind, Route};
    /// use serde_json::json;
    ///
    /// let route = Route::from_candidate(&json!({
    ///     "routeName": "Via Victoria Park",
    ///     "totalDistanceKm": 3.1,
    ///     "path": [{ "lat": 22.28, "lng": 114.15 }],
    ///     "restStops": []
    /// }))?;
    /// assert_eq!(route.route_name, "Via Victoria Park");
    ///
    /// let defect = Route::from_candidate(&json!({
    ///     "routeName": "Broken",
    ///     "totalDistanceKm": 1.0,
    ///     "path": []
    /// }))
    /// .unwrap_err();
    /// assert_eq!(defect.field, "restStops");
    /// assert_eq!(defect.kind, DefectKind::Missing);
    /// # Ok::<(), restwalk_core::RouteDefect>(())
    /// ```
    pub fn from_candidate(value: &Value) -> Result<Self, RouteDefect> {
        let object = as_object(value, ROOT_FIELD)?;
        let route_name = name_field(object, "", "routeName")?;
        let total_distance_km = distance_field(object, "", "totalDistanceKm")?;
        let path = array_field(object, "", "path")?
            .iter()
            .enumerate()
            .map(|(index, point)| lat_lng(point, &indexed("path", index)))
            .collect::<Result<Vec<_>, _>>()?;
        let rest_stops = array_field(object, "", "restStops")?
            .iter()
            .enumerate()
            .map(|(index, stop)| rest_stop(stop, &indexed("restStops", index)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            route_name,
            total_distance_km,
            path,
            rest_stops,
        })
    }

    /// Whether `value` would pass [`Route::from_candidate`].
    #[must_use]
    pub fn is_candidate(value: &Value) -> bool {
        Self::from_candidate(value).is_ok()
    }
}

fn rest_stop(value: &Value, path: &str) -> Result<RestStop, RouteDefect> {
    let object = as_object(value, path)?;
    let name = name_field(object, path, "name")?;
    let distance_from_previous_km = distance_field(object, path, "distanceFromPreviousKm")?;
    let location = lat_lng(field(object, path, "location")?, &nested(path, "location"))?;
    Ok(RestStop {
        name,
        distance_from_previous_km,
        location,
    })
}

fn lat_lng(value: &Value, path: &str) -> Result<LatLng, RouteDefect> {
    let object = as_object(value, path)?;
    let lat = number_field(object, path, "lat")?;
    if !is_latitude(lat) {
        return Err(RouteDefect::new(nested(path, "lat"), DefectKind::OutOfRange));
    }
    let lng = number_field(object, path, "lng")?;
    if !is_longitude(lng) {
        return Err(RouteDefect::new(nested(path, "lng"), DefectKind::OutOfRange));
    }
    Ok(LatLng { lat, lng })
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, RouteDefect> {
    value
        .as_object()
        .ok_or_else(|| RouteDefect::new(path, DefectKind::NotAnObject))
}

fn field<'a>(
    object: &'a Map<String, Value>,
    prefix: &str,
    key: &str,
) -> Result<&'a Value, RouteDefect> {
    object
        .get(key)
        .ok_or_else(|| RouteDefect::new(nested(prefix, key), DefectKind::Missing))
}

fn name_field(object: &Map<String, Value>, prefix: &str, key: &str) -> Result<String, RouteDefect> {
    let text = field(object, prefix, key)?
        .as_str()
        .ok_or_else(|| RouteDefect::new(nested(prefix, key), DefectKind::NotAString))?;
    if text.trim().is_empty() {
        return Err(RouteDefect::new(nested(prefix, key), DefectKind::Blank));
    }
    Ok(text.to_owned())
}

fn number_field(object: &Map<String, Value>, prefix: &str, key: &str) -> Result<f64, RouteDefect> {
    field(object, prefix, key)?
        .as_f64()
        .ok_or_else(|| RouteDefect::new(nested(prefix, key), DefectKind::NotANumber))
}

fn distance_field(
    object: &Map<String, Value>,
    prefix: &str,
    key: &str,
) -> Result<f64, RouteDefect> {
    let distance = number_field(object, prefix, key)?;
    if distance < 0.0 {
        return Err(RouteDefect::new(nested(prefix, key), DefectKind::Negative));
    }
    Ok(distance)
}

fn array_field<'a>(
    object: &'a Map<String, Value>,
    prefix: &str,
    key: &str,
) -> Result<&'a Vec<Value>, RouteDefect> {
    field(object, prefix, key)?
        .as_array()
        .ok_or_else(|| RouteDefect::new(nested(prefix, key), DefectKind::NotAnArray))
}

fn nested(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{prefix}.{key}")
    }
}

fn indexed(prefix: &str, index: usize) -> String {
    format!("{prefix}[{index}]")
}
