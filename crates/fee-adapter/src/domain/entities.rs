//! # Domain Entities
//!
//! Persistent adapter state and the result of a fee settlement.

use super::config::AdapterConfig;
use super::errors::{AdapterError, Address};
use super::value_objects::FeePct;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Adapter parameters and the fee checkpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterState {
    /// Last settled valuation in asset units (high-water mark).
    pub previous_total_assets: U256,
    /// Current fee rate.
    pub fee_pct: FeePct,
    /// Account credited with fee shares.
    pub fee_collector: Address,
    /// Administrator.
    pub owner: Address,
}

impl AdapterState {
    /// Initial state for a validated configuration. The checkpoint starts at zero.
    pub fn from_config(config: &AdapterConfig) -> Result<Self, AdapterError> {
        config.validate()?;
        Ok(Self {
            previous_total_assets: U256::zero(),
            fee_pct: config.fee()?,
            fee_collector: config.fee_collector,
            owner: config.owner,
        })
    }

    /// Configuration view of this state.
    pub fn config(&self) -> AdapterConfig {
        AdapterConfig {
            fee_pct: self.fee_pct.value(),
            fee_collector: self.fee_collector,
            owner: self.owner,
        }
    }
}

/// Outcome of pricing the yield accrued since the last checkpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeAccrual {
    /// Valuation the fee was priced against.
    pub valuation: U256,
    /// Positive change since the checkpoint (zero on loss).
    pub gain: U256,
    /// Fee in asset units.
    pub fee_assets: U256,
    /// Shares to mint to the collector.
    pub fee_shares: U256,
}

impl FeeAccrual {
    /// No fee at `valuation`.
    pub fn none(valuation: U256) -> Self {
        Self {
            valuation,
            ..Self::default()
        }
    }

    /// Whether settlement mints anything.
    pub fn is_empty(&self) -> bool {
        self.fee_shares.is_zero()
    }
}
