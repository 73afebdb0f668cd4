//! Estimation service

use tracing::debug;

use crate::{
    analysis,
    error::{AppError, AppResult},
    models::PerformanceReport,
};

/// Estimation service: guards the boundary and runs the analysis pipeline
pub struct EstimationService;

impl EstimationService {
    /// Estimate performance for a submitted text.
    ///
    /// `None` means the submission carried no `code` field at all, which is
    /// rejected here so the pipeline only ever sees a string. An empty string
    /// is a valid submission.
    pub fn estimate(code: Option<&str>) -> AppResult<PerformanceReport> {
        let code = code.ok_or_else(|| AppError::Validation("code is required".to_string()))?;

        let report = analysis::analyze(code);

        debug!(
            input_len = code.len(),
            is_code = report.is_code(),
            language = %report.language,
            time_complexity = %report.time_complexity,
            space_complexity = %report.space_complexity,
            "Estimation completed"
        );

        Ok(report)
    }
}
