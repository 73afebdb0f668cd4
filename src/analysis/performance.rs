//! Synthetic performance model
//!
//! Maps a (complexity class, language) pair to compile time, execution time
//! and speed labels. Nothing here runs or interprets the submitted code: the
//! execution time is an operation count for a fixed input size divided by an
//! assumed per-language throughput.

use crate::{
    constants::{
        EXECUTION_TIME_SUFFIX, SYNTHETIC_INPUT_SIZE, SYNTHETIC_LOG2_INPUT_SIZE, compile_times,
        ops_per_ms, speed_classes,
    },
    models::{ComplexityClass, LanguageLabel, PlatformRuntimes},
};

/// Fixed compile time label per language
pub fn estimate_compile_time(language: LanguageLabel) -> &'static str {
    match language {
        LanguageLabel::Python => compile_times::PYTHON,
        LanguageLabel::CCpp => compile_times::C_CPP,
        LanguageLabel::Java => compile_times::JAVA,
        LanguageLabel::JavaScript | LanguageLabel::Unknown => compile_times::UNKNOWN,
    }
}

/// Operation count for the synthetic input size
pub fn operation_count(complexity: ComplexityClass) -> u64 {
    let n = SYNTHETIC_INPUT_SIZE;
    match complexity {
        ComplexityClass::Constant => 1,
        ComplexityClass::Linear => n,
        ComplexityClass::Linearithmic => n * SYNTHETIC_LOG2_INPUT_SIZE,
        ComplexityClass::Quadratic => n * n,
    }
}

/// Assumed operations per millisecond
pub fn throughput(language: LanguageLabel) -> u64 {
    match language {
        LanguageLabel::Python => ops_per_ms::PYTHON,
        LanguageLabel::Java => ops_per_ms::JAVA,
        LanguageLabel::CCpp => ops_per_ms::C_CPP,
        LanguageLabel::JavaScript | LanguageLabel::Unknown => ops_per_ms::DEFAULT,
    }
}

/// Synthetic execution time in milliseconds
pub fn estimate_execution_ms(complexity: ComplexityClass, language: LanguageLabel) -> f64 {
    operation_count(complexity) as f64 / throughput(language) as f64
}

/// Synthetic execution time formatted for display, e.g. `"333.33 ms (n = 10⁵)"`
pub fn estimate_execution_time(complexity: ComplexityClass, language: LanguageLabel) -> String {
    format!(
        "{:.2}{}",
        estimate_execution_ms(complexity, language),
        EXECUTION_TIME_SUFFIX
    )
}

/// Qualitative speed bucket
pub fn speed_class(complexity: ComplexityClass) -> &'static str {
    match complexity {
        ComplexityClass::Constant => speed_classes::VERY_FAST,
        ComplexityClass::Linear => speed_classes::FAST,
        ComplexityClass::Linearithmic => speed_classes::RISKY,
        ComplexityClass::Quadratic => speed_classes::SLOW,
    }
}

/// Execution time replicated across judging platforms.
///
/// All three platforms get the same value.
pub fn platform_runtimes(complexity: ComplexityClass, language: LanguageLabel) -> PlatformRuntimes {
    let time = estimate_execution_time(complexity, language);

    PlatformRuntimes {
        leetcode: time.clone(),
        codeforces: time.clone(),
        hackerrank: time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CLASSES: [ComplexityClass; 4] = [
        ComplexityClass::Constant,
        ComplexityClass::Linear,
        ComplexityClass::Linearithmic,
        ComplexityClass::Quadratic,
    ];

    const ALL_LANGUAGES: [LanguageLabel; 5] = [
        LanguageLabel::Python,
        LanguageLabel::CCpp,
        LanguageLabel::Java,
        LanguageLabel::JavaScript,
        LanguageLabel::Unknown,
    ];

    #[test]
    fn test_compile_time_labels() {
        assert_eq!(estimate_compile_time(LanguageLabel::Python), "0 ms (interpreted)");
        assert_eq!(estimate_compile_time(LanguageLabel::CCpp), "40–150 ms");
        assert_eq!(estimate_compile_time(LanguageLabel::Java), "200–500 ms");
        assert_eq!(estimate_compile_time(LanguageLabel::JavaScript), "Unknown");
        assert_eq!(estimate_compile_time(LanguageLabel::Unknown), "Unknown");
    }

    #[test]
    fn test_quadratic_cpp_execution_time() {
        assert_eq!(
            estimate_execution_time(ComplexityClass::Quadratic, LanguageLabel::CCpp),
            "333.33 ms (n = 10⁵)"
        );
    }

    #[test]
    fn test_execution_time_table() {
        assert_eq!(
            estimate_execution_time(ComplexityClass::Constant, LanguageLabel::Python),
            "0.00 ms (n = 10⁵)"
        );
        assert_eq!(
            estimate_execution_time(ComplexityClass::Linear, LanguageLabel::Python),
            "0.02 ms (n = 10⁵)"
        );
        assert_eq!(
            estimate_execution_time(ComplexityClass::Linearithmic, LanguageLabel::Python),
            "0.34 ms (n = 10⁵)"
        );
        assert_eq!(
            estimate_execution_time(ComplexityClass::Quadratic, LanguageLabel::Python),
            "2000.00 ms (n = 10⁵)"
        );
        assert_eq!(
            estimate_execution_time(ComplexityClass::Quadratic, LanguageLabel::Java),
            "666.67 ms (n = 10⁵)"
        );
    }

    #[test]
    fn test_unknown_language_uses_default_throughput() {
        let label = LanguageLabel::Unknown;
        assert_eq!(throughput(label), ops_per_ms::DEFAULT);
        assert_eq!(
            estimate_execution_ms(ComplexityClass::Quadratic, label),
            estimate_execution_ms(ComplexityClass::Quadratic, LanguageLabel::Python)
        );
    }

    #[test]
    fn test_operation_counts() {
        assert_eq!(operation_count(ComplexityClass::Constant), 1);
        assert_eq!(operation_count(ComplexityClass::Linear), 100_000);
        assert_eq!(operation_count(ComplexityClass::Linearithmic), 1_700_000);
        assert_eq!(operation_count(ComplexityClass::Quadratic), 10_000_000_000);
    }

    #[test]
    fn test_speed_classes() {
        assert_eq!(speed_class(ComplexityClass::Constant), "Very Fast");
        assert_eq!(speed_class(ComplexityClass::Linear), "Fast");
        assert_eq!(speed_class(ComplexityClass::Linearithmic), "Risky");
        assert_eq!(speed_class(ComplexityClass::Quadratic), "Slow");
    }

    #[test]
    fn test_platform_runtimes_are_identical() {
        for complexity in ALL_CLASSES {
            for language in ALL_LANGUAGES {
                let runtimes = platform_runtimes(complexity, language);
                assert_eq!(runtimes.leetcode, runtimes.codeforces);
                assert_eq!(runtimes.codeforces, runtimes.hackerrank);
                assert_eq!(runtimes.leetcode, estimate_execution_time(complexity, language));
            }
        }
    }
}
