//! WGS84 coordinate pairs.

use geo::Coord;
use thiserror::Error;

/// A latitude/longitude pair in decimal degrees.
///
/// # Examples
/// ```
/// use restwalk_core::LatLng;
///
/// let pier = LatLng::new(22.2870, 114.1590)?;
/// assert_eq!(pier.to_coord().x, 114.1590);
/// # Ok::<(), restwalk_core::LatLngError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LatLng {
    /// Latitude in `[-90, 90]`.
    pub lat: f64,
    /// Longitude in `[-180, 180]`.
    pub lng: f64,
}

/// Errors returned by [`LatLng::new`].
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum LatLngError {
    /// Latitude was NaN, infinite, or outside `[-90, 90]`.
    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),
    /// Longitude was NaN, infinite, or outside `[-180, 180]`.
    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),
}

impl LatLng {
    /// Validates and constructs a [`LatLng`].
    pub fn new(lat: f64, lng: f64) -> Result<Self, LatLngError> {
        if !is_latitude(lat) {
            return Err(LatLngError::Latitude(lat));
        }
        if !is_longitude(lng) {
            return Err(LatLngError::Longitude(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Convert into a `geo` coordinate (`x = lng`, `y = lat`).
    #[must_use]
    pub const fn to_coord(self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }

    /// Format as `lat,lng`, the order map deep links expect.
    #[must_use]
    pub fn to_query_value(self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(value: LatLng) -> Self {
        value.to_coord()
    }
}

pub(crate) fn is_latitude(value: f64) -> bool {
    value.is_finite() && (-90.0..=90.0).contains(&value)
}

pub(crate) fn is_longitude(value: f64) -> bool {
    value.is_finite() && (-180.0..=180.0).contains(&value)
}
