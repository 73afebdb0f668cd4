//! Language label model

use serde::{Deserialize, Serialize};

use crate::constants::languages;

/// Programming language guessed from characteristic tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageLabel {
    #[serde(rename = "Python")]
    Python,
    #[serde(rename = "C / C++")]
    CCpp,
    #[serde(rename = "Java")]
    Java,
    #[serde(rename = "JavaScript")]
    JavaScript,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl LanguageLabel {
    /// Get the display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => languages::PYTHON,
            Self::CCpp => languages::C_CPP,
            Self::Java => languages::JAVA,
            Self::JavaScript => languages::JAVASCRIPT,
            Self::Unknown => languages::UNKNOWN,
        }
    }
}

impl std::fmt::Display for LanguageLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
