//! Counters for validation outcomes.
//!
//! Tracks how many inputs were accepted and why the rest were rejected,
//! broken down by the three failure categories.

use crate::error::{FailureCategory, IdentifierKind, ValidationError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics tracker for validation calls.
///
/// Cheap to clone; clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct ValidationMetrics {
    accepted_total: Arc<AtomicU64>,
    malformed_total: Arc<AtomicU64>,
    checksum_total: Arc<AtomicU64>,
    area_code_total: Arc<AtomicU64>,
}

impl ValidationMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of an assert-style constructor and pass it through.
    pub fn record<T>(
        &self,
        kind: IdentifierKind,
        outcome: Result<T, ValidationError>,
    ) -> Result<T, ValidationError> {
        match &outcome {
            Ok(_) => {
                self.accepted_total.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(kind = %kind, "Input accepted");
            }
            Err(err) => {
                self.track_rejection(err.category());
                tracing::debug!(
                    kind = %kind,
                    category = ?err.category(),
                    error = %err,
                    "Input rejected"
                );
            }
        }
        outcome
    }

    fn track_rejection(&self, category: FailureCategory) {
        let counter = match category {
            FailureCategory::Malformed => &self.malformed_total,
            FailureCategory::Checksum => &self.checksum_total,
            FailureCategory::AreaCode => &self.area_code_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Total accepted inputs.
    pub fn accepted_total(&self) -> u64 {
        self.accepted_total.load(Ordering::Relaxed)
    }

    /// Total inputs rejected as malformed.
    pub fn malformed_total(&self) -> u64 {
        self.malformed_total.load(Ordering::Relaxed)
    }

    /// Total inputs rejected for a check digit mismatch.
    pub fn checksum_total(&self) -> u64 {
        self.checksum_total.load(Ordering::Relaxed)
    }

    /// Total inputs rejected for an unknown area code.
    pub fn area_code_total(&self) -> u64 {
        self.area_code_total.load(Ordering::Relaxed)
    }

    /// Total rejected inputs across all categories.
    pub fn rejected_total(&self) -> u64 {
        self.malformed_total() + self.checksum_total() + self.area_code_total()
    }

    /// Get the rejection rate (0.0 to 1.0).
    pub fn rejection_rate(&self) -> f64 {
        let rejected = self.rejected_total() as f64;
        let total = (self.accepted_total() + self.rejected_total()) as f64;

        if total == 0.0 {
            0.0
        } else {
            rejected / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Validation Summary:\n\
             Accepted: {}\n\
             Rejected: {} ({:.2}% rejection rate)\n\
             Malformed: {}\n\
             Checksum Mismatch: {}\n\
             Unknown Area Code: {}",
            self.accepted_total(),
            self.rejected_total(),
            self.rejection_rate() * 100.0,
            self.malformed_total(),
            self.checksum_total(),
            self.area_code_total(),
        )
    }
}
