//! Observability module for monitoring validation outcomes.
//!
//! The identifier engine itself is pure; callers that want counters wrap
//! their calls with a [`ValidationMetrics`] tracker.

pub mod metrics;

pub use metrics::ValidationMetrics;
