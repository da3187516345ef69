//! `RouteGenerator` backed by the Gemini `generateContent` REST API.
//!
//! The [`RouteGenerator`] trait is synchronous so the planner can be driven
//! from plain code. This generator bridges the async HTTP call to the sync
//! interface by blocking on a Tokio runtime it owns.
//!
//! # Example
//!
//! ```no_run
//! use restwalk_core::{PlanRequest, RoutePlanner};
//! use restwalk_data::generation::{GeminiConfig, GeminiRouteGenerator};
//!
//! let config = GeminiConfig::default().with_api_key("secret");
//! let generator = GeminiRouteGenerator::with_config(config)?;
//! let request = PlanRequest::new("Central Pier", "Victoria Park", 1.5)?;
//! let routes = RoutePlanner::new(generator).plan(&request)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client, StatusCode};
use restwalk_core::{GenerationError, RouteGenerator};
use serde_json::Value;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::gemini::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};

/// Default Gemini endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Default user agent for generation requests.
pub const DEFAULT_USER_AGENT: &str = "restwalk/0.1";

/// Default request timeout in seconds. Generation is slow.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Error type for [`GeminiRouteGenerator`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Configuration for [`GeminiRouteGenerator`].
#[derive(Clone)]
pub struct GeminiConfig {
    /// Base URL for the service, without the API path.
    pub base_url: String,
    /// Model identifier, e.g. `"gemini-3-pro-preview"`.
    pub model: String,
    /// API key sent in the `x-goog-api-key` header.
    pub api_key: Option<String>,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl GeminiConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The configured key, if present and not blank.
    fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Route generator calling the Gemini `generateContent` endpoint.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the generator blocks on its own stored
/// runtime. Inside a multi-threaded runtime it uses that runtime's handle
/// with [`tokio::task::block_in_place`]. Inside a `current_thread` runtime
/// the request runs on the stored runtime from a scoped helper thread, and
/// the calling thread waits for it.
///
/// The stored runtime is shut down in the background on drop, so the
/// generator may be dropped from async code.
pub struct GeminiRouteGenerator {
    client: Client,
    config: GeminiConfig,
    runtime: Option<Runtime>,
}

impl std::fmt::Debug for GeminiRouteGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiRouteGenerator")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl GeminiRouteGenerator {
    /// Create a generator using `api_key` and otherwise default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(GeminiConfig::default().with_api_key(api_key))
    }

    /// Create a generator with explicit configuration.
    ///
    /// A missing key is not an error here; it is reported by
    /// [`RouteGenerator::generate`] as [`GenerationError::MissingCredential`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: GeminiConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime: Some(runtime),
        })
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Build the `generateContent` URL for the configured model.
    fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Run `future` to completion on the stored runtime.
    fn block_on_own<F>(&self, future: F) -> Result<String, GenerationError>
    where
        F: Future<Output = Result<String, GenerationError>>,
    {
        match &self.runtime {
            Some(runtime) => runtime.block_on(future),
            None => Err(GenerationError::Network {
                url: self.endpoint_url(),
                message: "generator runtime has shut down".to_owned(),
            }),
        }
    }

    async fn generate_async(
        &self,
        api_key: &str,
        instruction: &str,
        schema: &Value,
    ) -> Result<String, GenerationError> {
        let url = self.endpoint_url();
        debug!("requesting routes from {url}");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateContentRequest::new(instruction, schema))
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        if !status.is_success() {
            return Err(convert_error_status(status, &body, &url));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|err| GenerationError::Decode {
                message: err.to_string(),
            })?;
        Ok(parsed.into_text())
    }

    /// Convert a reqwest error to a `GenerationError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> GenerationError {
        if error.is_timeout() {
            return GenerationError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return GenerationError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        GenerationError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

/// Classify a non-success reply, preferring the service's own error envelope.
fn convert_error_status(status: StatusCode, body: &str, url: &str) -> GenerationError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(envelope) => {
            let code = if envelope.error.status.is_empty() {
                status.as_u16().to_string()
            } else {
                envelope.error.status
            };
            warn!("route generation service rejected the request: {code}");
            GenerationError::Service {
                code,
                message: envelope.error.message,
            }
        }
        Err(_) => GenerationError::Http {
            url: url.to_owned(),
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_owned(),
        },
    }
}

impl RouteGenerator for GeminiRouteGenerator {
    /// Send `instruction` and `schema` to the service and return its text.
    ///
    /// # Runtime behaviour
    ///
    /// Safe to call from plain code and from either Tokio runtime flavour.
    /// A `current_thread` caller's executor is blocked until the request
    /// finishes.
    fn generate(&self, instruction: &str, schema: &Value) -> Result<String, GenerationError> {
        let Some(api_key) = self.config.credential() else {
            return Err(GenerationError::MissingCredential);
        };

        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                let future = self.generate_async(api_key, instruction, schema);
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            Ok(_) => std::thread::scope(|scope| {
                let worker = scope.spawn(|| {
                    self.block_on_own(self.generate_async(api_key, instruction, schema))
                });
                worker.join().unwrap_or_else(|payload| std::panic::resume_unwind(payload))
            }),
            Err(_) => self.block_on_own(self.generate_async(api_key, instruction, schema)),
        }
    }
}

impl Drop for GeminiRouteGenerator {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
