//! Parameters for a plan request.

use thiserror::Error;

/// Smallest rest interval offered by interactive front ends, in km.
pub const MIN_REST_INTERVAL_KM: f64 = 0.5;
/// Largest rest interval offered by interactive front ends, in km.
pub const MAX_REST_INTERVAL_KM: f64 = 5.0;
/// Rest interval used when the caller does not choose one, in km.
pub const DEFAULT_REST_INTERVAL_KM: f64 = 1.5;

/// Origin, destination, and desired rest-stop spacing.
///
/// The interval is a planning hint passed to the generator, not a hard
/// constraint, so only positivity is enforced here.
///
/// # Examples
/// ```
/// use restwalk_core::PlanRequest;
///
/// let request = PlanRequest::new("Central Pier", "Victoria Park", 1.5)?;
/// assert_eq!(request.origin(), "Central Pier");
/// # Ok::<(), restwalk_core::PlanRequestError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    origin: String,
    destination: String,
    rest_interval_km: f64,
}

/// Errors returned by [`PlanRequest::new`].
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum PlanRequestError {
    /// Origin was empty or whitespace.
    #[error("an origin is required")]
    MissingOrigin,
    /// Destination was empty or whitespace.
    #[error("a destination is required")]
    MissingDestination,
    /// Interval was zero, negative, or not finite.
    #[error("rest interval must be a positive number of kilometres, got {0}")]
    NonPositiveInterval(f64),
}

impl PlanRequest {
    /// Validates and constructs a [`PlanRequest`].
    ///
    /// Surrounding whitespace is trimmed from both place names.
    pub fn new(
        origin: impl AsRef<str>,
        destination: impl AsRef<str>,
        rest_interval_km: f64,
    ) -> Result<Self, PlanRequestError> {
        let origin_text = origin.as_ref().trim();
        if origin_text.is_empty() {
            return Err(PlanRequestError::MissingOrigin);
        }
        let destination_text = destination.as_ref().trim();
        if destination_text.is_empty() {
            return Err(PlanRequestError::MissingDestination);
        }
        if !(rest_interval_km.is_finite() && rest_interval_km > 0.0) {
            return Err(PlanRequestError::NonPositiveInterval(rest_interval_km));
        }
        Ok(Self {
            origin: origin_text.to_owned(),
            destination: destination_text.to_owned(),
            rest_interval_km,
        })
    }

    /// Free-text origin.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Free-text destination.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Desired spacing between rest stops in km.
    #[must_use]
    pub const fn rest_interval_km(&self) -> f64 {
        self.rest_interval_km
    }
}
