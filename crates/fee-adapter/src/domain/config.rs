//! Adapter configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use fee_adapter::domain::AdapterConfigBuilder;
//!
//! let config = AdapterConfigBuilder::new()
//!     .fee_pct(parse_units("0.1", 18)?)
//!     .fee_collector(collector)
//!     .owner(owner)
//!     .build()?;
//! ```

use super::errors::{AdapterError, Address, ZERO_ADDRESS};
use super::value_objects::{FeePct, ONE};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Construction parameters for a fee adapter.
///
/// The default (zero fee, zero addresses) does not validate; collector and
/// owner must always be supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Performance fee as a fraction of `ONE`
    pub fee_pct: U256,
    /// Account credited with fee shares
    pub fee_collector: Address,
    /// Account allowed to administer the adapter
    pub owner: Address,
}

impl AdapterConfig {
    /// Create a new configuration with validation
    pub fn new(fee_pct: U256, fee_collector: Address, owner: Address) -> Result<Self, AdapterError> {
        let config = Self {
            fee_pct,
            fee_collector,
            owner,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate in construction order: fee bound, collector, owner.
    pub fn validate(&self) -> Result<(), AdapterError> {
        if self.fee_pct > ONE {
            return Err(AdapterError::FeePctAboveOne { pct: self.fee_pct });
        }

        if self.fee_collector == ZERO_ADDRESS {
            return Err(AdapterError::CollectorZero);
        }

        if self.owner == ZERO_ADDRESS {
            return Err(AdapterError::OwnerZero);
        }

        Ok(())
    }

    /// Validated fee rate.
    pub fn fee(&self) -> Result<FeePct, AdapterError> {
        FeePct::new(self.fee_pct)
    }

    /// Builder-style method to set the fee rate
    pub fn with_fee_pct(mut self, pct: U256) -> Self {
        self.fee_pct = pct;
        self
    }

    /// Builder-style method to set the fee collector
    pub fn with_fee_collector(mut self, collector: Address) -> Self {
        self.fee_collector = collector;
        self
    }

    /// Builder-style method to set the owner
    pub fn with_owner(mut self, owner: Address) -> Self {
        self.owner = owner;
        self
    }
}

/// Fluent builder for [`AdapterConfig`].
#[derive(Default)]
pub struct AdapterConfigBuilder {
    fee_pct: Option<U256>,
    fee_collector: Option<Address>,
    owner: Option<Address>,
}

impl AdapterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fee rate (fraction of `ONE`)
    pub fn fee_pct(mut self, pct: U256) -> Self {
        self.fee_pct = Some(pct);
        self
    }

    /// Set the fee collector
    pub fn fee_collector(mut self, collector: Address) -> Self {
        self.fee_collector = Some(collector);
        self
    }

    /// Set the owner
    pub fn owner(mut self, owner: Address) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Build the configuration, validating all parameters
    pub fn build(self) -> Result<AdapterConfig, AdapterError> {
        let defaults = AdapterConfig::default();

        let config = AdapterConfig {
            fee_pct: self.fee_pct.unwrap_or(defaults.fee_pct),
            fee_collector: self.fee_collector.unwrap_or(defaults.fee_collector),
            owner: self.owner.unwrap_or(defaults.owner),
        };

        config.validate()?;
        Ok(config)
    }
}
