//! Binary snapshots of adapter state.
//!
//! A snapshot holds everything the adapter owns (ledger, checkpoint, fee
//! parameters, decimals) plus the addresses of the asset and vault it was
//! bound to. External ledgers are not captured; `restore` re-attaches them
//! and rejects any that differ from the recorded binding.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::adapter_service::FeeAdapter;
use crate::domain::{check_supply_conservation, fmt_address, AdapterError, AdapterState, Address, ShareLedger};
use crate::metrics::NoOpMetrics;
use crate::ports::{FungibleToken, UnderlyingVault};

/// Persisted adapter state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterSnapshot {
    /// Share balances, allowances and supply
    pub ledger: ShareLedger,
    /// Checkpoint and parameters
    pub state: AdapterState,
    /// Share decimals
    pub decimals: u8,
    /// Underlying asset at capture time
    pub asset: Address,
    /// Yield vault at capture time
    pub vault: Address,
}

impl AdapterSnapshot {
    /// Encode with bincode.
    pub fn encode(&self) -> Result<Vec<u8>, AdapterError> {
        bincode::serialize(self).map_err(|e| AdapterError::Serialization(e.to_string()))
    }

    /// Decode from bincode.
    pub fn decode(bytes: &[u8]) -> Result<Self, AdapterError> {
        bincode::deserialize(bytes).map_err(|e| AdapterError::Serialization(e.to_string()))
    }

    /// Check that the snapshot describes a valid adapter.
    pub fn validate(&self) -> Result<(), AdapterError> {
        self.state.config().validate()?;
        check_supply_conservation(&self.ledger)
    }

    /// Check that `vault` and `asset` are the ledgers this snapshot was taken over.
    pub fn check_binding(
        &self,
        vault: &impl UnderlyingVault,
        asset: &impl FungibleToken,
    ) -> Result<(), AdapterError> {
        if asset.address() != self.asset {
            return Err(AdapterError::SnapshotMismatch {
                field: "asset",
                recorded: fmt_address(&self.asset),
                found: fmt_address(&asset.address()),
            });
        }
        if vault.address() != self.vault {
            return Err(AdapterError::SnapshotMismatch {
                field: "vault",
                recorded: fmt_address(&self.vault),
                found: fmt_address(&vault.address()),
            });
        }
        if asset.decimals() != self.decimals {
            return Err(AdapterError::SnapshotMismatch {
                field: "decimals",
                recorded: self.decimals.to_string(),
                found: asset.decimals().to_string(),
            });
        }
        Ok(())
    }
}

impl<V: UnderlyingVault, A: FungibleToken> FeeAdapter<V, A> {
    /// Capture the adapter's own state.
    pub fn snapshot(&self) -> AdapterSnapshot {
        AdapterSnapshot {
            ledger: self.ledger.clone(),
            state: self.state.clone(),
            decimals: self.decimals,
            asset: self.asset.address(),
            vault: self.vault.address(),
        }
    }

    /// Rebuild an adapter from a snapshot over the given external ledgers.
    ///
    /// The journal starts empty and metrics are disabled until
    /// [`with_metrics`](Self::with_metrics) is called.
    pub fn restore(
        address: Address,
        vault: Arc<V>,
        asset: Arc<A>,
        snapshot: AdapterSnapshot,
    ) -> Result<Self, AdapterError> {
        snapshot.validate()?;
        Self::check_asset(vault.as_ref(), asset.as_ref())?;
        snapshot.check_binding(vault.as_ref(), asset.as_ref())?;

        info!(
            adapter = %fmt_address(&address),
            holders = snapshot.ledger.holder_count(),
            supply = %snapshot.ledger.total_supply(),
            checkpoint = %snapshot.state.previous_total_assets,
            "fee adapter restored"
        );

        Ok(Self {
            address,
            vault,
            asset,
            decimals: snapshot.decimals,
            ledger: snapshot.ledger,
            state: snapshot.state,
            events: Vec::new(),
            metrics: Arc::new(NoOpMetrics),
        })
    }
}
