//! Performance report model

use serde::{Deserialize, Serialize};

use crate::constants::report;

/// The single output of the estimation pipeline.
///
/// Every field is a display string; numeric values are formatted before they
/// land here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceReport {
    #[serde(rename = "type")]
    pub input_type: String,
    pub language: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub compile_time: String,
    pub execution_time: String,
    pub speed: String,
    pub leetcode_runtime: String,
    pub codeforces_runtime: String,
    pub hackerrank_runtime: String,
    pub note: String,
}

impl PerformanceReport {
    /// Fixed template returned for input that is not code
    pub fn not_code() -> Self {
        let na = || report::NOT_APPLICABLE.to_string();

        Self {
            input_type: report::TYPE_TEXT.to_string(),
            language: na(),
            time_complexity: report::PASTE_CODE.to_string(),
            space_complexity: report::PASTE_CODE.to_string(),
            compile_time: na(),
            execution_time: na(),
            speed: na(),
            leetcode_runtime: na(),
            codeforces_runtime: na(),
            hackerrank_runtime: na(),
            note: report::NOTE_TEXT.to_string(),
        }
    }

    /// Whether the input was classified as code
    pub fn is_code(&self) -> bool {
        self.input_type == report::TYPE_CODE
    }
}

/// Synthetic runtime per judging platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformRuntimes {
    pub leetcode: String,
    pub codeforces: String,
    pub hackerrank: String,
}
