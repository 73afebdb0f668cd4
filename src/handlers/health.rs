//! Health check handlers

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::{models::LanguageLabel, state::AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Languages the detector can name
    pub languages: Vec<LanguageLabel>,
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        languages: vec![
            LanguageLabel::Python,
            LanguageLabel::CCpp,
            LanguageLabel::Java,
            LanguageLabel::JavaScript,
        ],
    })
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
