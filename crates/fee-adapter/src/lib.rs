//! # Fee Adapter
//!
//! Performance-fee wrapper around a yield-bearing vault.
//!
//! Users deposit an underlying asset and receive adapter shares. Whenever an
//! operation would change the share/asset ratio or the economic actors, the
//! adapter first skims a fee on yield earned since the last checkpoint
//! (high-water mark) and mints it to the fee collector as new shares.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure accounting types, no I/O
//!   - `ShareLedger`: Share balances, allowances and supply
//!   - `AdapterState`: Checkpoint, fee rate, collector, owner
//!   - `AdapterConfig`: Configuration with validation
//!   - `AdapterConfigBuilder`: Fluent builder for configuration
//!
//! - **Algorithms** (`algorithms/`): 512-bit `mul_div`, share/asset
//!   conversion, high-water-mark fee pricing
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `FeeAdapterApi`: Driving port (inbound API)
//!   - `FungibleToken`, `UnderlyingVault`: Driven ports (external ledgers)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `FeeAdapter`: Implements `FeeAdapterApi`
//!   - `AdapterSnapshot`: bincode persistence
//!
//! - **Adapters Layer** (`adapters/`): In-memory external ledgers
//!   - `InMemoryToken`: ERC-20
//!   - `InMemoryVault`: ERC-4626 with a configurable liquidity ceiling
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: `total_supply == sum(balances)` after every call
//! - **INVARIANT-2**: `fee_pct <= ONE`, and after construction it only decreases
//! - **INVARIANT-3**: `max_withdraw(h) <= vault.max_withdraw(adapter)`
//! - **INVARIANT-4**: A failed call leaves ledger and checkpoint untouched
//!
//! ## Usage Example
//!
//! ```ignore
//! use fee_adapter::{AdapterConfigBuilder, FeeAdapter, FeeAdapterApi, InMemoryToken, InMemoryVault};
//! use std::sync::Arc;
//!
//! let asset = Arc::new(InMemoryToken::new(asset_addr, "USDC", 6));
//! let vault = Arc::new(InMemoryVault::new(vault_addr, asset.clone()));
//! let config = AdapterConfigBuilder::new()
//!     .fee_pct(parse_units("0.1", 18)?)
//!     .fee_collector(collector)
//!     .owner(owner)
//!     .build()?;
//!
//! let mut adapter = FeeAdapter::new(adapter_addr, vault.clone(), asset.clone(), config)?;
//! let shares = adapter.deposit(&alice, parse_units("100", 6)?, &alice)?;
//! ```

#![warn(missing_docs)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{InMemoryToken, InMemoryVault};
pub use domain::{
    fmt_address, format_units, parse_units, AdapterConfig, AdapterConfigBuilder, AdapterError,
    AdapterEvent, AdapterState, Address, FeePct, Rounding, ShareLedger, TokenError,
    NATIVE_TOKEN_ADDRESS, ONE, ZERO_ADDRESS,
};
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{FeeAdapterApi, FungibleToken, UnderlyingVault};
pub use service::{AdapterSnapshot, FeeAdapter};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
