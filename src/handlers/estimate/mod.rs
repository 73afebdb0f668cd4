//! Estimation handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Estimation routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::get_estimate).post(handler::create_estimate))
        .route("/form", post(handler::create_form_estimate))
}
