//! Estimation handler implementations

use axum::{
    Extension, Form, Json,
    extract::rejection::{FormRejection, JsonRejection},
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::RequestId,
    services::EstimationService,
};

use super::{request::EstimateRequest, response::EstimateResponse};

/// Initial page load: nothing submitted yet
pub async fn get_estimate() -> Json<EstimateResponse> {
    Json(EstimateResponse::empty())
}

/// Estimate a JSON submission
pub async fn create_estimate(
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> AppResult<Json<EstimateResponse>> {
    let Json(payload) = payload?;
    estimate(request_id, payload)
}

/// Estimate a urlencoded form submission
pub async fn create_form_estimate(
    Extension(request_id): Extension<RequestId>,
    payload: Result<Form<EstimateRequest>, FormRejection>,
) -> AppResult<Json<EstimateResponse>> {
    let Form(payload) = payload?;
    estimate(request_id, payload)
}

fn estimate(request_id: RequestId, payload: EstimateRequest) -> AppResult<Json<EstimateResponse>> {
    payload.validate()?;

    let report = EstimationService::estimate(payload.code.as_deref())?;

    Ok(Json(EstimateResponse::completed(report, request_id.0)))
}
