//! Prometheus metrics for the fee adapter.
//!
//! All metrics follow the naming convention: `fee_adapter_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Encoder, Opts, Registry, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Committed deposits and mints
    pub static ref DEPOSITS: Counter = Counter::new(
        "fee_adapter_deposits_total",
        "Total committed deposits and mints"
    ).expect("metric creation failed");

    /// Committed withdrawals and redemptions
    pub static ref WITHDRAWALS: Counter = Counter::new(
        "fee_adapter_withdrawals_total",
        "Total committed withdrawals and redemptions"
    ).expect("metric creation failed");

    /// Settlements that minted fee shares
    pub static ref FEE_SETTLEMENTS: Counter = Counter::new(
        "fee_adapter_fee_settlements_total",
        "Total fee settlements that minted shares"
    ).expect("metric creation failed");

    /// Admin changes by parameter
    pub static ref ADMIN_CHANGES: CounterVec = CounterVec::new(
        Opts::new("fee_adapter_admin_changes_total", "Admin parameter changes"),
        &["parameter"]  // parameter: fee_collector/fee_pct/owner
    ).expect("metric creation failed");

    /// Rescued token sweeps
    pub static ref RESCUES: Counter = Counter::new(
        "fee_adapter_rescues_total",
        "Total rescued token sweeps"
    ).expect("metric creation failed");

    /// Rejected calls by operation and error kind
    pub static ref FAILURES: CounterVec = CounterVec::new(
        Opts::new("fee_adapter_failures_total", "Rejected calls by operation and kind"),
        &["operation", "kind"]
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Calling it again is harmless.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(DEPOSITS.clone()),
        Box::new(WITHDRAWALS.clone()),
        Box::new(FEE_SETTLEMENTS.clone()),
        Box::new(ADMIN_CHANGES.clone()),
        Box::new(RESCUES.clone()),
        Box::new(FAILURES.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
