//! Code vs. prose classification

use crate::constants::CODE_MARKERS;

/// Returns true when any code marker appears anywhere in `text`.
///
/// A single stray `;` in prose is enough to classify the whole input as code.
pub fn is_code(text: &str) -> bool {
    CODE_MARKERS.iter().any(|marker| text.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_not_code() {
        assert!(!is_code(""));
    }

    #[test]
    fn test_plain_assignment_is_not_code() {
        assert!(!is_code("x = 1"));
        assert!(!is_code("Given an array, return the maximum subarray sum."));
    }

    #[test]
    fn test_each_marker_is_sufficient() {
        assert!(is_code("def f(): pass"));
        assert!(is_code("int main() { return 0; }"));
        assert!(is_code("#include <stdio.h>"));
        assert!(is_code("public static int x"));
        assert!(is_code("call()"));
        assert!(is_code("}"));
    }

    #[test]
    fn test_semicolon_in_prose_counts() {
        assert!(is_code("Read the input; then print the answer."));
    }

    #[test]
    fn test_non_ascii_input() {
        assert!(!is_code("配列の最大値を求めよ"));
        assert!(is_code("λ → {}"));
    }
}
