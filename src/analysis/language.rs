//! Language detection

use crate::{
    constants::{FUNCTION_DEF_MARKER, INCLUDE_MARKER, JAVASCRIPT_FUNCTION_MARKER, JAVA_MAIN_MARKER},
    models::LanguageLabel,
};

/// Detection rules in priority order. The first marker found wins.
const LANGUAGE_RULES: &[(&str, LanguageLabel)] = &[
    (FUNCTION_DEF_MARKER, LanguageLabel::Python),
    (INCLUDE_MARKER, LanguageLabel::CCpp),
    (JAVA_MAIN_MARKER, LanguageLabel::Java),
    (JAVASCRIPT_FUNCTION_MARKER, LanguageLabel::JavaScript),
];

/// Guess the language of `code` from characteristic tokens.
///
/// Rule order decides ties: JavaScript containing `"def "` anywhere,
/// even inside a string literal, is reported as Python.
pub fn detect_language(code: &str) -> LanguageLabel {
    LANGUAGE_RULES
        .iter()
        .find(|(marker, _)| code.contains(marker))
        .map(|&(_, language)| language)
        .unwrap_or(LanguageLabel::Unknown)
}
