//! Estimation request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_CODE_LENGTH;

/// Estimate request, accepted as JSON or as a urlencoded form.
///
/// `code` is optional at the wire level so that a missing field surfaces as a
/// validation error rather than an extractor rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct EstimateRequest {
    /// Raw pasted text; may be empty
    #[validate(length(max = MAX_CODE_LENGTH))]
    pub code: Option<String>,
}
