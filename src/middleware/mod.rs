//! HTTP middleware

pub mod logging;

pub use logging::{RequestId, logging_middleware};
