//! AlgoLens - Static Performance Estimation
//!
//! This library classifies a pasted text blob as source code or a
//! problem statement, guesses the language, and produces a heuristic
//! time/space complexity and synthetic runtime report without ever running
//! the code.
//!
//! # Architecture
//!
//! - **Analysis**: the pure estimation pipeline (classifier, language
//!   detector, complexity estimator, performance model)
//! - **Services**: boundary guards and logging around the pipeline
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Models**: labels and the performance report
//!
//! Everything under `analysis` is a pure function of its input and can be
//! used directly:
//!
//! ```
//! let report = algolens::analyze("def f(xs):\n    for x in xs: print(x)");
//! assert_eq!(report.language, "Python");
//! assert_eq!(report.time_complexity, "O(n)");
//! ```

pub mod analysis;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use analysis::analyze;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ComplexityClass, LanguageLabel, PerformanceReport};
pub use state::AppState;
