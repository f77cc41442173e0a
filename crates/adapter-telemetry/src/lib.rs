//! # Adapter Telemetry
//!
//! Logging and metrics for fee adapter processes.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` with an `EnvFilter` and a text or JSON layer
//! - **Metrics**: Prometheus counters fed by [`PrometheusRecorder`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use adapter_telemetry::{init_telemetry, PrometheusRecorder, TelemetryConfig};
//! use std::sync::Arc;
//!
//! let _guard = init_telemetry(TelemetryConfig::from_env())?;
//! let adapter = FeeAdapter::new(address, vault, asset, config)?
//!     .with_metrics(Arc::new(PrometheusRecorder::new()));
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ADAPTER_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `ADAPTER_JSON_LOGS` | `false` | JSON log lines |
//! | `ADAPTER_CONSOLE_OUTPUT` | `true` | Install the log subscriber |
//! | `OTEL_SERVICE_NAME` | `fee-adapter` | Service name in logs |
//! | `ADAPTER_NETWORK` | `devnet` | Network label |

#![warn(missing_docs)]

mod config;
mod logging;
mod metrics;
mod recorder;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging};
pub use metrics::{
    gather_metrics, register_metrics, ADMIN_CHANGES, DEPOSITS, FAILURES, FEE_SETTLEMENTS,
    RESCUES, WITHDRAWALS,
};
pub use recorder::PrometheusRecorder;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    /// Prometheus registration or encoding failed
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and metrics.
///
/// Returns a guard that should be held for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    // Metrics first, so early log lines can already count failures
    register_metrics()?;
    init_logging(&config)?;

    Ok(TelemetryGuard { config })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    config: TelemetryConfig,
}

impl TelemetryGuard {
    /// Configuration telemetry was started with.
    pub fn config(&self) -> &TelemetryConfig {
        &self.config
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.config.full_service_name(), "Shutting down telemetry...");
    }
}
