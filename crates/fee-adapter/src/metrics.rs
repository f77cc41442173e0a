//! Metrics hooks for adapter operations
//!
//! Counts committed deposits, withdrawals, fee settlements, admin changes and
//! rescues, plus rejected calls by error kind.
//!
//! ## Usage
//!
//! ```ignore
//! use fee_adapter::metrics::{Metrics, MetricsRecorder};
//! use std::sync::Arc;
//!
//! let metrics = Arc::new(Metrics::new());
//! let adapter = FeeAdapter::new(address, vault, asset, config)?
//!     .with_metrics(metrics.clone());
//!
//! // ... drive the adapter ...
//! println!("{:?}", metrics.snapshot());
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for adapter operations
///
/// Thread-safe counters for monitoring adapter activity.
#[derive(Default)]
pub struct Metrics {
    /// Committed deposits and mints
    pub deposits: AtomicU64,
    /// Committed withdrawals and redemptions
    pub withdrawals: AtomicU64,
    /// Settlements that minted fee shares
    pub fee_settlements: AtomicU64,
    /// Fee collector, fee rate and ownership changes
    pub admin_changes: AtomicU64,
    /// Rescued token sweeps
    pub rescues: AtomicU64,
    /// Rejected calls
    pub failures: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            deposits: self.deposits.load(Ordering::Relaxed),
            withdrawals: self.withdrawals.load(Ordering::Relaxed),
            fee_settlements: self.fee_settlements.load(Ordering::Relaxed),
            admin_changes: self.admin_changes.load(Ordering::Relaxed),
            rescues: self.rescues.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.deposits.store(0, Ordering::Relaxed);
        self.withdrawals.store(0, Ordering::Relaxed);
        self.fee_settlements.store(0, Ordering::Relaxed);
        self.admin_changes.store(0, Ordering::Relaxed);
        self.rescues.store(0, Ordering::Relaxed);
        self.failures.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Deposits and mints
    pub deposits: u64,
    /// Withdrawals and redemptions
    pub withdrawals: u64,
    /// Settlements that minted fee shares
    pub fee_settlements: u64,
    /// Collector, fee and ownership changes
    pub admin_changes: u64,
    /// Successful rescues
    pub rescues: u64,
    /// Rejected calls
    pub failures: u64,
}

/// Trait for custom metrics recording implementations
///
/// Implement this trait to integrate with external metrics systems
/// like Prometheus.
pub trait MetricsRecorder: Send + Sync {
    /// Record a committed deposit or mint
    fn record_deposit(&self);

    /// Record a committed withdrawal or redemption
    fn record_withdrawal(&self);

    /// Record a settlement that minted fee shares
    fn record_fee_settlement(&self);

    /// Record an admin change (`fee_collector`, `fee_pct`, `owner`)
    fn record_admin_change(&self, parameter: &'static str);

    /// Record a rescue
    fn record_rescue(&self);

    /// Record a rejected call
    fn record_failure(&self, operation: &'static str, kind: &'static str);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_deposit(&self) {}
    fn record_withdrawal(&self) {}
    fn record_fee_settlement(&self) {}
    fn record_admin_change(&self, _: &'static str) {}
    fn record_rescue(&self) {}
    fn record_failure(&self, _: &'static str, _: &'static str) {}
}

impl MetricsRecorder for Metrics {
    fn record_deposit(&self) {
        self.deposits.fetch_add(1, Ordering::Relaxed);
    }

    fn record_withdrawal(&self) {
        self.withdrawals.fetch_add(1, Ordering::Relaxed);
    }

    fn record_fee_settlement(&self) {
        self.fee_settlements.fetch_add(1, Ordering::Relaxed);
    }

    fn record_admin_change(&self, _parameter: &'static str) {
        self.admin_changes.fetch_add(1, Ordering::Relaxed);
    }

    fn record_rescue(&self) {
        self.rescues.fetch_add(1, Ordering::Relaxed);
    }

    fn record_failure(&self, _operation: &'static str, _kind: &'static str) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }
}
