use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    ProxyConfig, UpstreamWeather, WeatherQuery,
    error::{DEFAULT_REJECTION_MESSAGE, ProviderError},
};

use super::WeatherProvider;

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: &ProxyConfig) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Client(e.to_string()))?;

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            http,
        })
    }
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Error body OpenWeather sends alongside a non-success status.
#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(
        &self,
        query: &WeatherQuery,
    ) -> Result<UpstreamWeather, ProviderError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", query.location.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| {
                ProviderError::Transport(format!("Failed to send request to OpenWeather: {e}"))
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            ProviderError::Transport(format!("Failed to read OpenWeather response body: {e}"))
        })?;

        // Anything but 200 is a rejection, including other 2xx codes.
        if status != StatusCode::OK {
            debug!(
                status = status.as_u16(),
                body = %truncate_body(&body),
                "OpenWeather rejected request"
            );
            return Err(ProviderError::Rejected {
                status: status.as_u16(),
                message: rejection_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            ProviderError::UnexpectedShape(format!(
                "Failed to parse OpenWeather current JSON: {e}; body: {}",
                truncate_body(&body)
            ))
        })
    }
}

/// Provider's `message` field, or the generic fallback when there is none.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<OwErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
