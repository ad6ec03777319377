//! Service Layer
//!
//! Application service that picks the sequential or parallel solver from
//! configuration and records metrics.

pub mod max_subarray_service;

pub use max_subarray_service::MaxSubarrayService;
