use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;

use crate::{
    ProxyConfig, UpstreamWeather, WeatherQuery, error::ProviderError,
    provider::openweather::OpenWeatherProvider,
};

pub mod openweather;

/// The single outbound capability the proxy depends on.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for `query.location`. Exactly one outbound call.
    async fn current_weather(&self, query: &WeatherQuery)
    -> Result<UpstreamWeather, ProviderError>;
}

/// Construct the provider used by the running proxy.
pub fn provider_from_config(
    config: &ProxyConfig,
) -> Result<Arc<dyn WeatherProvider>, ProviderError> {
    let provider = OpenWeatherProvider::new(config)?;
    Ok(Arc::new(provider))
}
