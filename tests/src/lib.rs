//! # Fee Adapter Test Suite
//!
//! Unified test crate driving the adapter end to end over in-memory ledgers.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── support.rs      # Shared fixture
//!     ├── fee_flows.rs    # High-water-mark fee flows
//!     ├── liquidity.rs    # Withdrawal clamp under vault liquidity limits
//!     ├── drain.rs        # Vault losses
//!     ├── atomicity.rs    # Failed calls leave no trace
//!     └── properties.rs   # Randomized conservation and rounding checks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p fee-adapter-tests
//! cargo test -p fee-adapter-tests integration::drain
//!
//! # Benchmarks
//! cargo bench -p fee-adapter-tests
//! ```

#![allow(dead_code)]

pub mod integration;
