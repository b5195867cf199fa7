//! Route definitions for the Garden Advisor API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod chat;
mod growth;
mod health;
mod i18n;
mod irrigation;
mod plants;
mod profiles;

pub use chat::chat_routes;
pub use growth::growth_routes;
pub use i18n::i18n_routes;
pub use irrigation::irrigation_routes;
pub use plants::plant_routes;
pub use profiles::profile_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Garden Advisor API v1" }))
        .nest("/irrigation", irrigation::irrigation_routes())
        .nest("/growth", growth::growth_routes())
        .nest("/profiles", profiles::profile_routes())
        .nest("/plants", plants::plant_routes())
        .nest("/chat", chat::chat_routes())
        .nest("/i18n", i18n::i18n_routes())
}
