//! Shared application state for the proxy.

use std::sync::Arc;

use weather_core::WeatherProvider;

/// Injected into handlers via Axum's `State` extractor.
///
/// Holds only the outbound provider; nothing here is mutated after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }
}
