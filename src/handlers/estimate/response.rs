//! Estimation response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::PerformanceReport;

/// Estimate response.
///
/// `result` is `null` until something has been submitted.
#[derive(Debug, Serialize, Deserialize)]
pub struct EstimateResponse {
    pub result: Option<PerformanceReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl EstimateResponse {
    /// Response for a page load with no submission
    pub fn empty() -> Self {
        Self {
            result: None,
            request_id: None,
            generated_at: None,
        }
    }

    /// Response carrying a finished report
    pub fn completed(report: PerformanceReport, request_id: Uuid) -> Self {
        Self {
            result: Some(report),
            request_id: Some(request_id),
            generated_at: Some(Utc::now()),
        }
    }
}
