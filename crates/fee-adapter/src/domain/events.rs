//! Events journaled by the adapter and drained by the caller.

use super::errors::Address;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Adapter event journal entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdapterEvent {
    /// Assets deposited and shares issued.
    Deposit {
        /// Account that supplied the assets
        caller: Address,
        /// Account that received the shares
        owner: Address,
        /// Assets deposited
        assets: U256,
        /// Shares minted
        shares: U256,
    },
    /// Shares burned and assets paid out.
    Withdraw {
        /// Account that initiated the withdrawal
        caller: Address,
        /// Account that received the assets
        receiver: Address,
        /// Account whose shares were burned
        owner: Address,
        /// Assets paid out
        assets: U256,
        /// Shares burned
        shares: U256,
    },
    /// Share movement. Mints come from, and burns go to, the zero address.
    Transfer {
        /// Sender
        from: Address,
        /// Recipient
        to: Address,
        /// Shares moved
        amount: U256,
    },
    /// Share allowance set.
    Approval {
        /// Share holder
        owner: Address,
        /// Approved spender
        spender: Address,
        /// New allowance
        amount: U256,
    },
    /// Performance fee minted to the collector.
    FeesSettled {
        /// Collector credited
        collector: Address,
        /// Fee shares minted
        amount: U256,
    },
    /// Fee collector replaced.
    FeeCollectorSet {
        /// New collector
        collector: Address,
    },
    /// Fee rate lowered.
    FeePctSet {
        /// New rate
        pct: U256,
    },
    /// Stray tokens swept.
    FundsRescued {
        /// Token swept
        token: Address,
        /// Amount sent
        amount: U256,
        /// Recipient
        recipient: Address,
    },
    /// Ownership moved.
    OwnershipTransferred {
        /// Outgoing owner
        previous: Address,
        /// Incoming owner
        new: Address,
    },
}

impl AdapterEvent {
    /// Event name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Deposit { .. } => "Deposit",
            Self::Withdraw { .. } => "Withdraw",
            Self::Transfer { .. } => "Transfer",
            Self::Approval { .. } => "Approval",
            Self::FeesSettled { .. } => "FeesSettled",
            Self::FeeCollectorSet { .. } => "FeeCollectorSet",
            Self::FeePctSet { .. } => "FeePctSet",
            Self::FundsRescued { .. } => "FundsRescued",
            Self::OwnershipTransferred { .. } => "OwnershipTransferred",
        }
    }
}
