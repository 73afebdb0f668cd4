//! Logging middleware

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use crate::constants::REQUEST_ID_HEADER;

/// Per-request id, available to handlers as an extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

/// Tags each request with an id and logs its outcome
pub async fn logging_middleware(mut request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    request.extensions_mut().insert(RequestId(request_id));

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    if status.is_server_error() {
        warn!(
            %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed"
        );
    } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
        warn!(
            %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request rejected"
        );
    } else {
        info!(
            %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        );
    }

    response
}
