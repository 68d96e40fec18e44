//! Axum router construction for the proxy.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete router.
///
/// - `GET /weather` -- simplified current weather for a location
///
/// Every request is logged through [`TraceLayer`].
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/weather", get(handlers::get_weather))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
