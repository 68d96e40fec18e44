//! Core library for the weather proxy.
//!
//! This crate defines:
//! - Process configuration (API key, upstream endpoint, timeout)
//! - The upstream provider abstraction and its OpenWeather implementation
//! - Domain models and the provider-payload to report transformation
//!
//! It is used by `weather-proxy`, but carries no HTTP server code of its own.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::{ConfigError, ProxyConfig};
pub use error::ProviderError;
pub use model::{UpstreamWeather, WeatherQuery, WeatherReport};
pub use provider::{WeatherProvider, provider_from_config};
