//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for callers
//! - Driven Ports (outbound) - where sequences come from and results go

pub mod inbound;
pub mod outbound;

pub use inbound::MaxSubarrayApi;
pub use outbound::{ResultSink, SequenceSource};
