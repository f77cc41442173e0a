//! Prometheus-backed implementation of the adapter's metrics port.

use fee_adapter::MetricsRecorder;

use crate::metrics::{ADMIN_CHANGES, DEPOSITS, FAILURES, FEE_SETTLEMENTS, RESCUES, WITHDRAWALS};

/// Forwards adapter activity to the global Prometheus counters.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrometheusRecorder;

impl PrometheusRecorder {
    /// Create a recorder.
    pub fn new() -> Self {
        Self
    }
}

impl MetricsRecorder for PrometheusRecorder {
    fn record_deposit(&self) {
        DEPOSITS.inc();
    }

    fn record_withdrawal(&self) {
        WITHDRAWALS.inc();
    }

    fn record_fee_settlement(&self) {
        FEE_SETTLEMENTS.inc();
    }

    fn record_admin_change(&self, parameter: &'static str) {
        ADMIN_CHANGES.with_label_values(&[parameter]).inc();
    }

    fn record_rescue(&self) {
        RESCUES.inc();
    }

    fn record_failure(&self, operation: &'static str, kind: &'static str) {
        FAILURES.with_label_values(&[operation, kind]).inc();
    }
}
