use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::ProviderError;

/// One incoming lookup. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub location: String,
    pub include_extra: bool,
}

impl WeatherQuery {
    pub fn new(location: impl Into<String>, include_extra: bool) -> Self {
        Self { location: location.into(), include_extra }
    }
}

/// Raw provider payload. Numbers stay as [`Number`] so their upstream
/// representation (`15.0`, `80`) is what ends up in the report.
///
/// Humidity and wind are only read for extra fields, so their absence is
/// not an error until a caller asks for them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpstreamWeather {
    pub name: String,
    pub main: UpstreamMain,
    pub weather: Vec<UpstreamCondition>,
    #[serde(default)]
    pub wind: Option<UpstreamWind>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpstreamMain {
    pub temp: Number,
    #[serde(default)]
    pub humidity: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpstreamCondition {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpstreamWind {
    pub speed: Number,
}

/// Simplified response returned to callers of `GET /weather`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<String>,
}

impl WeatherReport {
    /// Reshape a provider payload. Humidity and wind speed are only filled in
    /// when `include_extra` is set.
    pub fn from_upstream(
        upstream: &UpstreamWeather,
        include_extra: bool,
    ) -> Result<Self, ProviderError> {
        let condition = upstream.weather.first().ok_or_else(|| {
            ProviderError::UnexpectedShape("`weather` array is empty".to_string())
        })?;

        let (humidity, wind_speed) = if include_extra {
            let humidity = upstream.main.humidity.as_ref().ok_or_else(|| {
                ProviderError::UnexpectedShape("`main.humidity` is missing".to_string())
            })?;
            let wind = upstream.wind.as_ref().ok_or_else(|| {
                ProviderError::UnexpectedShape("`wind` is missing".to_string())
            })?;
            (Some(format!("{humidity}%")), Some(format!("{} m/s", wind.speed)))
        } else {
            (None, None)
        };

        Ok(Self {
            city: upstream.name.clone(),
            temperature: format!("{}°C", upstream.main.temp),
            description: capitalize_first(&condition.description),
            humidity,
            wind_speed,
        })
    }
}

/// Uppercase the first character, leave the rest as is.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
