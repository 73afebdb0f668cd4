//! Domain models
//!
//! Labels produced by the estimation pipeline and the report it returns.

pub mod complexity;
pub mod language;
pub mod report;

pub use complexity::*;
pub use language::*;
pub use report::*;
