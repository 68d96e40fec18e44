//! HTTP handlers for the proxy.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/weather` | Current weather for `?location=`, `include_extra=true` adds humidity and wind |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::{error, warn};
use weather_core::{ProviderError, WeatherQuery, WeatherReport};

use crate::error::{ApiError, FieldError};
use crate::state::AppState;

/// Raw query parameters for `GET /weather`, validated by [`WeatherParams::validate`].
#[derive(Debug, Default, Deserialize)]
pub struct WeatherParams {
    pub location: Option<String>,
    pub include_extra: Option<String>,
}

impl WeatherParams {
    /// Check every parameter and report all problems at once.
    pub fn validate(self) -> Result<WeatherQuery, ApiError> {
        let mut errors = Vec::new();

        let location = match self.location {
            None => {
                errors.push(FieldError::query("location", "missing", "Field required", None));
                None
            }
            Some(loc) if loc.trim().is_empty() => {
                errors.push(FieldError::query(
                    "location",
                    "string_too_short",
                    "String should have at least 1 character",
                    Some(loc),
                ));
                None
            }
            Some(loc) => Some(loc),
        };

        let include_extra = match self.include_extra {
            None => Some(false),
            Some(raw) => match parse_flag(&raw) {
                Some(flag) => Some(flag),
                None => {
                    errors.push(FieldError::query(
                        "include_extra",
                        "bool_parsing",
                        "Input should be a valid boolean, unable to interpret input",
                        Some(raw),
                    ));
                    None
                }
            },
        };

        match (location, include_extra) {
            (Some(location), Some(include_extra)) if errors.is_empty() => {
                Ok(WeatherQuery { location, include_extra })
            }
            _ => Err(ApiError::Validation(errors)),
        }
    }
}

/// Lenient boolean parsing for query flags, case-insensitive.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "on" | "t" => Some(true),
        "false" | "0" | "no" | "n" | "off" | "f" => Some(false),
        _ => None,
    }
}

/// Fetch current weather for a location and return the simplified report.
///
/// # Query Parameters
///
/// - `location` (required) -- city name forwarded to the provider
/// - `include_extra` (optional, default `false`) -- add `humidity` and `wind_speed`
pub async fn get_weather(
    State(state): State<Arc<AppState>>,
    params: Result<Query<WeatherParams>, QueryRejection>,
) -> Result<Json<WeatherReport>, ApiError> {
    let Query(params) = params.map_err(|rejection| {
        ApiError::Validation(vec![FieldError::query(
            "*",
            "query_parsing",
            rejection.body_text(),
            None,
        )])
    })?;
    let query = params.validate()?;

    let report = state
        .provider
        .current_weather(&query)
        .await
        .and_then(|upstream| WeatherReport::from_upstream(&upstream, query.include_extra))
        .inspect_err(|e| log_provider_error(&query, e))?;

    Ok(Json(report))
}

fn log_provider_error(query: &WeatherQuery, err: &ProviderError) {
    match err {
        ProviderError::Rejected { status, message } => {
            warn!(location = %query.location, status, %message, "provider rejected lookup");
        }
        ProviderError::Transport(msg) => {
            warn!(location = %query.location, error = %msg, "provider unreachable");
        }
        ProviderError::UnexpectedShape(msg) | ProviderError::Client(msg) => {
            error!(location = %query.location, error = %msg, "unusable provider response");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(location: Option<&str>, include_extra: Option<&str>) -> WeatherParams {
        WeatherParams {
            location: location.map(str::to_string),
            include_extra: include_extra.map(str::to_string),
        }
    }

    fn field_errors(err: ApiError) -> Vec<FieldError> {
        match err {
            ApiError::Validation(errors) => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn location_only_defaults_include_extra_to_false() {
        let query = params(Some("London"), None).validate().unwrap();
        assert_eq!(query, WeatherQuery::new("London", false));
    }

    #[test]
    fn include_extra_variants() {
        for raw in ["true", "TRUE", "1", "yes", "on"] {
            let query = params(Some("London"), Some(raw)).validate().unwrap();
            assert!(query.include_extra, "{raw} should be true");
        }
        for raw in ["false", "0", "No", "off"] {
            let query = params(Some("London"), Some(raw)).validate().unwrap();
            assert!(!query.include_extra, "{raw} should be false");
        }
    }

    #[test]
    fn missing_location_is_reported() {
        let errors = field_errors(params(None, None).validate().unwrap_err());

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, "missing");
        assert_eq!(errors[0].loc, vec!["query", "location"]);
    }

    #[test]
    fn blank_location_is_reported() {
        let errors = field_errors(params(Some("  "), None).validate().unwrap_err());
        assert_eq!(errors[0].kind, "string_too_short");
    }

    #[test]
    fn all_problems_are_collected() {
        let errors = field_errors(params(None, Some("maybe")).validate().unwrap_err());

        let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec!["missing", "bool_parsing"]);
        assert_eq!(errors[1].input.as_deref(), Some("maybe"));
    }

    #[test]
    fn parse_flag_rejects_garbage() {
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }
}
