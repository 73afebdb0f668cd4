//! End-to-end estimation: raw text in, performance report out

use crate::{
    constants::report,
    models::PerformanceReport,
};

use super::{
    classifier::is_code,
    complexity::{estimate_space_complexity, estimate_time_complexity},
    language::detect_language,
    performance::{estimate_compile_time, estimate_execution_time, platform_runtimes, speed_class},
};

/// Run the full pipeline over `text`.
///
/// Input that is not code gets the fixed placeholder template; code runs
/// through language detection, complexity estimation and the performance
/// model in that order.
pub fn analyze(text: &str) -> PerformanceReport {
    if !is_code(text) {
        return PerformanceReport::not_code();
    }

    let language = detect_language(text);
    let time_complexity = estimate_time_complexity(text);
    let space_complexity = estimate_space_complexity(text);
    let runtimes = platform_runtimes(time_complexity, language);

    PerformanceReport {
        input_type: report::TYPE_CODE.to_string(),
        language: language.to_string(),
        time_complexity: time_complexity.to_string(),
        space_complexity: space_complexity.to_string(),
        compile_time: estimate_compile_time(language).to_string(),
        execution_time: estimate_execution_time(time_complexity, language),
        speed: speed_class(time_complexity).to_string(),
        leetcode_runtime: runtimes.leetcode,
        codeforces_runtime: runtimes.codeforces,
        hackerrank_runtime: runtimes.hackerrank,
        note: report::NOTE_CODE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUBBLE_SORT: &str = "def bubble_sort(arr):\n for i in range(len(arr)):\n for j in range(len(arr)):\n if arr[j] > arr[j+1]: arr[j], arr[j+1] = arr[j+1], arr[j]";

    #[test]
    fn test_bubble_sort_report() {
        let r = analyze(BUBBLE_SORT);
        assert!(r.is_code());
        assert_eq!(r.language, "Python");
        // "bubble_sort(" contains "sort(", which outranks the two loops
        assert_eq!(r.time_complexity, "O(n log n)");
        // arr[j] is not "[]" and no other container keyword appears
        assert_eq!(r.space_complexity, "O(1)");
        assert_eq!(r.compile_time, "0 ms (interpreted)");
        assert_eq!(r.execution_time, "0.34 ms (n = 10⁵)");
        assert_eq!(r.speed, "Risky");
    }

    #[test]
    fn test_nested_loops_report() {
        let code = "#include <stdio.h>\nint main() {\n  for (;;) { for (;;) {} }\n}";
        let r = analyze(code);
        assert_eq!(r.language, "C / C++");
        assert_eq!(r.time_complexity, "O(n²)");
        assert_eq!(r.execution_time, "333.33 ms (n = 10⁵)");
        assert_eq!(r.leetcode_runtime, r.execution_time);
        assert_eq!(r.codeforces_runtime, r.execution_time);
        assert_eq!(r.hackerrank_runtime, r.execution_time);
        assert_eq!(r.speed, "Slow");
        assert_eq!(
            r.note,
            "All metrics are static estimates based on code structure, not real execution"
        );
    }

    #[test]
    fn test_problem_statement_report() {
        let r = analyze("Given an array, return the maximum subarray sum.");
        assert_eq!(r, PerformanceReport::not_code());
        assert_eq!(r.input_type, "Text / Problem Statement");
        assert_eq!(r.language, "N/A");
        assert_eq!(r.space_complexity, "Paste code to estimate");
        assert_eq!(r.leetcode_runtime, "N/A");
    }

    #[test]
    fn test_empty_input_is_not_code() {
        assert_eq!(analyze(""), PerformanceReport::not_code());
    }

    #[test]
    fn test_code_without_language_markers() {
        let r = analyze("x = compute();");
        assert_eq!(r.language, "Unknown");
        assert_eq!(r.compile_time, "Unknown");
        assert_eq!(r.time_complexity, "O(1)");
        assert_eq!(r.speed, "Very Fast");
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(analyze(BUBBLE_SORT), analyze(BUBBLE_SORT));
    }
}
