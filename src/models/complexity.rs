//! Complexity class model

use serde::{Deserialize, Serialize};

use crate::constants::complexity;

/// Coarse growth-rate label assigned by fixed rule, not derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplexityClass {
    #[serde(rename = "O(1)")]
    Constant,
    #[serde(rename = "O(n)")]
    Linear,
    #[serde(rename = "O(n log n)")]
    Linearithmic,
    #[serde(rename = "O(n²)")]
    Quadratic,
}

impl ComplexityClass {
    /// Get the display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constant => complexity::CONSTANT,
            Self::Linear => complexity::LINEAR,
            Self::Linearithmic => complexity::LINEARITHMIC,
            Self::Quadratic => complexity::QUADRATIC,
        }
    }
}

impl std::fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_labels() {
        assert_eq!(ComplexityClass::Quadratic.to_string(), "O(n²)");
        assert_eq!(ComplexityClass::Linearithmic.as_str(), "O(n log n)");
        let json = serde_json::to_string(&ComplexityClass::Constant).unwrap();
        assert_eq!(json, "\"O(1)\"");
    }
}
