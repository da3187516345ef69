//! Failures of a single plan attempt.

use thiserror::Error;

use crate::{GenerationError, RouteDefect};

/// Why [`crate::RoutePlanner::plan`] produced no routes.
///
/// Every variant is terminal for the attempt. The `Display` output is a
/// short message suitable for end users and never contains the raw
/// response text.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// The generator returned nothing but whitespace.
    #[error("the route service returned an empty response")]
    EmptyResponse,
    /// The response text was not valid JSON.
    #[error("the route service response was not valid JSON")]
    MalformedResponse {
        /// Parser error.
        #[source]
        source: serde_json::Error,
        /// Raw response text, kept for diagnostics only.
        raw: String,
    },
    /// The JSON was not an array, or the array was empty.
    #[error("the route service responded but found no usable routes")]
    NoRoutesFound,
    /// A route failed validation.
    #[error("route {index} is incomplete: {defect}")]
    IncompleteRouteData {
        /// Zero-based index of the offending route.
        index: usize,
        /// First defect found in that route.
        #[source]
        defect: RouteDefect,
    },
    /// Calling the route service failed.
    #[error("could not reach the route service: {0}")]
    TransportFailure(#[source] GenerationError),
}

/// Tag identifying a [`RoutingError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutingErrorKind {
    /// See [`RoutingError::EmptyResponse`].
    EmptyResponse,
    /// See [`RoutingError::MalformedResponse`].
    MalformedResponse,
    /// See [`RoutingError::NoRoutesFound`].
    NoRoutesFound,
    /// See [`RoutingError::IncompleteRouteData`].
    IncompleteRouteData,
    /// See [`RoutingError::TransportFailure`].
    TransportFailure,
}

impl RoutingError {
    /// The variant tag, for callers that branch on the failure kind.
    #[must_use]
    pub const fn kind(&self) -> RoutingErrorKind {
        match self {
            Self::EmptyResponse => RoutingErrorKind::EmptyResponse,
            Self::MalformedResponse { .. } => RoutingErrorKind::MalformedResponse,
            Self::NoRoutesFound => RoutingErrorKind::NoRoutesFound,
            Self::IncompleteRouteData { .. } => RoutingErrorKind::IncompleteRouteData,
            Self::TransportFailure(_) => RoutingErrorKind::TransportFailure,
        }
    }
}

impl From<GenerationError> for RoutingError {
    fn from(value: GenerationError) -> Self {
        Self::TransportFailure(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DefectKind;
    use rstest::rstest;

    #[rstest]
    fn malformed_message_hides_raw_text() {
        let raw = "```json [oops";
        let source = serde_json::from_str::<serde_json::Value>(raw).expect_err("invalid JSON");
        let err = RoutingError::MalformedResponse {
            source,
            raw: raw.to_owned(),
        };
        assert!(!err.to_string().contains("oops"));
        assert_eq!(err.kind(), RoutingErrorKind::MalformedResponse);
    }

    #[rstest]
    fn incomplete_message_names_index_and_field() {
        let err = RoutingError::IncompleteRouteData {
            index: 1,
            defect: RouteDefect {
                field: "restStops".to_owned(),
                kind: DefectKind::Missing,
            },
        };
        assert_eq!(err.to_string(), "route 1 is incomplete: restStops is missing");
    }

    #[rstest]
    fn transport_failures_convert() {
        let err = RoutingError::from(GenerationError::MissingCredential);
        assert_eq!(err.kind(), RoutingErrorKind::TransportFailure);
    }
}
