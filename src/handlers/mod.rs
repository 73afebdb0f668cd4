//! HTTP Request Handlers
//!
//! Thin JSON boundary over the estimation engine. HTML rendering is left to
//! whatever front end consumes these routes.

pub mod estimate;
pub mod health;

use std::time::Duration;

use axum::{Router, http::StatusCode, middleware};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    constants::API_BASE_PATH,
    error::AppError,
    middleware::logging_middleware,
    state::AppState,
};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/estimate", estimate::routes())
}

/// Build the full application with middleware and limits applied
pub fn app(state: AppState) -> Router {
    let limits = state.config().limits.clone();

    Router::new()
        .nest(API_BASE_PATH, routes())
        .fallback(not_found)
        .layer(middleware::from_fn(logging_middleware))
        .layer(RequestBodyLimitLayer::new(limits.max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(limits.request_timeout_secs),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
