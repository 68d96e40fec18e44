//! HTTP proxy exposing a simplified current-weather endpoint.
//!
//! `GET /weather?location=<city>[&include_extra=true]` forwards the lookup to
//! the configured [`WeatherProvider`](weather_core::WeatherProvider), reshapes
//! the answer into a [`WeatherReport`](weather_core::WeatherReport) and maps
//! provider failures onto HTTP statuses:
//!
//! - provider rejection -- same status, `{"detail": <provider message>}`
//! - provider unreachable -- `503 {"detail": "Weather service unavailable"}`
//! - unusable provider body -- `502`
//! - bad query parameters -- `422`, no outbound call
//!
//! No state is shared between requests besides the provider handle.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
