//! Route generation backed by a hosted language model.
//!
//! This module provides [`GeminiRouteGenerator`], an implementation of
//! [`restwalk_core::RouteGenerator`] that asks the Gemini `generateContent`
//! API for candidate walking routes constrained by a JSON response schema.
//!
//! # Example
//!
//! ```no_run
//! use restwalk_data::generation::{GeminiConfig, GeminiRouteGenerator};
//! use std::time::Duration;
//!
//! let config = GeminiConfig::default()
//!     .with_api_key("secret")
//!     .with_model("gemini-3-pro-preview")
//!     .with_timeout(Duration::from_secs(60));
//! let generator = GeminiRouteGenerator::with_config(config)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod gemini;
mod provider;

#[doc(hidden)]
pub mod test_support;

pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, GeminiConfig,
    GeminiRouteGenerator, ProviderBuildError,
};
