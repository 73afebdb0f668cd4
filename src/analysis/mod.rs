//! Heuristic estimation engine
//!
//! A linear chain of pure, pattern-based stages:
//!
//! 1. **Classifier** (`classifier.rs`): is the input code at all?
//! 2. **Language detector** (`language.rs`): first matching marker wins.
//! 3. **Complexity estimator** (`complexity.rs`): loop/sort/recursion counting
//!    for time, container keywords for space.
//! 4. **Performance model** (`performance.rs`): synthetic compile time,
//!    execution time, speed class and per-platform runtimes.
//!
//! `pipeline::analyze` wires the stages together. No stage reads shared state,
//! so the engine is safe to call from any number of tasks at once.

pub mod classifier;
pub mod complexity;
pub mod language;
pub mod performance;
pub mod pipeline;

pub use classifier::is_code;
pub use complexity::{TimeSignals, estimate_space_complexity, estimate_time_complexity};
pub use language::detect_language;
pub use performance::{
    estimate_compile_time, estimate_execution_ms, estimate_execution_time, platform_runtimes,
    speed_class,
};
pub use pipeline::analyze;
