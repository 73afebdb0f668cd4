//! Business logic services

pub mod estimation_service;

pub use estimation_service::EstimationService;
