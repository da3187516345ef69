//! Seam to the external route-generation service.
//!
//! The `RouteGenerator` trait accepts an instruction and an output schema and
//! returns the raw response text. Nothing about the returned text is trusted;
//! [`crate::RoutePlanner`] validates it before any route is built.

use serde_json::Value;
use thiserror::Error;

/// Transport-level failures from [`RouteGenerator::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No credential was configured for the service.
    #[error("no API key is configured for the route generation service")]
    MissingCredential,
    /// Network error while contacting the service.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Request URL.
        url: String,
        /// Error description.
        message: String,
    },
    /// The request exceeded the transport timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL.
        url: String,
        /// Timeout that elapsed, in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}: {message}")]
    Http {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The service reported an error in its response body.
    #[error("route generation service error ({code}): {message}")]
    Service {
        /// Service status code, e.g. `INVALID_ARGUMENT`.
        code: String,
        /// Message supplied by the service.
        message: String,
    },
    /// The response envelope could not be decoded.
    #[error("failed to decode route generation response: {message}")]
    Decode {
        /// Decoder error description.
        message: String,
    },
}

/// Produce candidate routes as JSON text from a natural-language instruction.
///
/// Implementations should pass `schema` to the service as a structural
/// constraint on the output. Callers must not assume the returned text
/// honours it.
///
/// # Examples
///
/// ```
/// use restwalk_core::{GenerationError, RouteGenerator};
/// use serde_json::Value;
///
/// struct Canned;
///
/// impl RouteGenerator for Canned {
///     fn generate(&self, _instruction: &str, _schema: &Value) -> Result<String, GenerationError> {
///         Ok("[]".to_owned())
///     }
/// }
///
/// let text = Canned.generate("two walks", &Value::Null)?;
/// assert_eq!(text, "[]");
/// # Ok::<(), GenerationError>(())
/// ```
pub trait RouteGenerator {
    /// Return the raw response text for `instruction`.
    fn generate(&self, instruction: &str, schema: &Value) -> Result<String, GenerationError>;
}

impl<G: RouteGenerator + ?Sized> RouteGenerator for &G {
    fn generate(&self, instruction: &str, schema: &Value) -> Result<String, GenerationError> {
        (**self).generate(instruction, schema)
    }
}

impl<G: RouteGenerator + ?Sized> RouteGenerator for Box<G> {
    fn generate(&self, instruction: &str, schema: &Value) -> Result<String, GenerationError> {
        (**self).generate(instruction, schema)
    }
}
