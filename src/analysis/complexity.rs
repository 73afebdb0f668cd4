//! Time and space complexity estimation
//!
//! Both estimators work on raw substrings. `"for"` inside `"forward"` counts
//! as a loop and two function definitions count as recursion.

use crate::{
    constants::{CONTAINER_MARKERS, FUNCTION_DEF_MARKER, LOOP_MARKERS, SORT_MARKERS},
    models::ComplexityClass,
};

/// Surface signals the time estimate is decided from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSignals {
    /// Total occurrences of every loop keyword
    pub loops: usize,
    /// A sorting call is present
    pub sorting: bool,
    /// More than one function definition is present
    pub recursion: bool,
}

impl TimeSignals {
    /// Scan `code` for loop, sort and recursion signals
    pub fn scan(code: &str) -> Self {
        let loops = LOOP_MARKERS
            .iter()
            .map(|marker| code.matches(marker).count())
            .sum();
        let sorting = SORT_MARKERS.iter().any(|marker| code.contains(marker));
        let recursion = code.matches(FUNCTION_DEF_MARKER).count() > 1;

        Self {
            loops,
            sorting,
            recursion,
        }
    }

    /// Apply the decision rules in order
    pub fn classify(&self) -> ComplexityClass {
        if self.sorting && self.loops >= 1 {
            ComplexityClass::Linearithmic
        } else if self.loops >= 2 {
            ComplexityClass::Quadratic
        } else if self.recursion || self.loops == 1 {
            ComplexityClass::Linear
        } else {
            ComplexityClass::Constant
        }
    }
}

/// Estimate time complexity from loop, sort and recursion signals
pub fn estimate_time_complexity(code: &str) -> ComplexityClass {
    TimeSignals::scan(code).classify()
}

/// Estimate space complexity from container keywords (case-insensitive)
pub fn estimate_space_complexity(code: &str) -> ComplexityClass {
    let lower = code.to_lowercase();
    if CONTAINER_MARKERS.iter().any(|marker| lower.contains(marker)) {
        ComplexityClass::Linear
    } else {
        ComplexityClass::Constant
    }
}
