//! Scenario file format.
//!
//! A scenario is a JSON document naming the adapter parameters and a list of
//! steps. Amounts are decimal strings in asset units (`"12.5"`); accounts are
//! free-form names mapped to addresses by the runner.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// A replayable scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Label shown in reports
    pub name: String,

    /// Asset (and share) decimals
    #[serde(default = "default_decimals")]
    pub decimals: u8,

    /// Fee rate as a decimal fraction, `"0.1"` for 10%
    pub fee_pct: String,

    /// Vault liquidity ceiling as a multiple of the adapter's claim
    #[serde(default = "default_liquidity_factor")]
    pub liquidity_factor: String,

    /// Initial owner
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Initial fee collector
    #[serde(default = "default_collector")]
    pub fee_collector: String,

    /// Accounts to include in status tables besides owner and collector
    #[serde(default)]
    pub accounts: Vec<String>,

    /// Steps in execution order
    pub steps: Vec<ScenarioStep>,
}

fn default_decimals() -> u8 {
    18
}

fn default_liquidity_factor() -> String {
    "1".to_string()
}

fn default_owner() -> String {
    "owner".to_string()
}

fn default_collector() -> String {
    "collector".to_string()
}

impl Scenario {
    /// Load a scenario from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing scenario {}", path.display()))
    }

    /// Parse a scenario from JSON text.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let scenario: Scenario = serde_json::from_str(text)?;
        if scenario.steps.is_empty() {
            anyhow::bail!("scenario {:?} has no steps", scenario.name);
        }
        Ok(scenario)
    }
}

/// One step plus the error kind it is expected to fail with, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioStep {
    /// The action
    #[serde(flatten)]
    pub step: Step,

    /// Expected error kind (`"liquidity"`, `"authorization"`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect_error: Option<String>,
}

/// Scenario actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Mint asset to an account and approve the adapter for it.
    Fund {
        /// Account credited
        account: String,
        /// Asset amount
        amount: String,
    },
    /// Deposit assets.
    Deposit {
        /// Payer
        account: String,
        /// Asset amount
        amount: String,
        /// Share receiver, defaults to the payer
        #[serde(default)]
        receiver: Option<String>,
    },
    /// Mint an exact share amount.
    Mint {
        /// Payer
        account: String,
        /// Share amount
        shares: String,
        /// Share receiver, defaults to the payer
        #[serde(default)]
        receiver: Option<String>,
    },
    /// Withdraw an exact asset amount.
    Withdraw {
        /// Share owner, also the caller
        account: String,
        /// Asset amount
        amount: String,
        /// Asset receiver, defaults to the owner
        #[serde(default)]
        receiver: Option<String>,
    },
    /// Withdraw whatever `max_withdraw` allows.
    WithdrawMax {
        /// Share owner
        account: String,
    },
    /// Redeem an exact share amount.
    Redeem {
        /// Share owner, also the caller
        account: String,
        /// Share amount
        shares: String,
    },
    /// Redeem whatever `max_redeem` allows.
    RedeemMax {
        /// Share owner
        account: String,
    },
    /// Move shares between accounts.
    Transfer {
        /// Sender
        from: String,
        /// Recipient
        to: String,
        /// Share amount
        shares: String,
    },
    /// Vault earns assets.
    Yield {
        /// Asset amount added to the vault
        amount: String,
    },
    /// Vault loses assets.
    Drain {
        /// Asset amount removed from the vault
        amount: String,
    },
    /// Change the vault liquidity ceiling.
    SetLiquidity {
        /// New factor
        factor: String,
    },
    /// Replace the fee collector.
    SetFeeCollector {
        /// Caller
        caller: String,
        /// New collector
        collector: String,
    },
    /// Lower the fee rate.
    SetFeePct {
        /// Caller
        caller: String,
        /// New rate as a decimal fraction
        pct: String,
    },
    /// Hand over administration.
    TransferOwnership {
        /// Caller
        caller: String,
        /// New owner
        new_owner: String,
    },
    /// Send stray tokens to the adapter.
    Stray {
        /// Amount of the stray token
        amount: String,
    },
    /// Sweep stray tokens out of the adapter.
    Rescue {
        /// Caller
        caller: String,
        /// Recipient
        recipient: String,
        /// Amount of the stray token
        amount: String,
        /// Target the vault claim token instead of the stray token
        #[serde(default)]
        vault_token: bool,
    },
}

impl Step {
    /// Operation label for reports.
    pub fn op(&self) -> &'static str {
        match self {
            Step::Fund { .. } => "fund",
            Step::Deposit { .. } => "deposit",
            Step::Mint { .. } => "mint",
            Step::Withdraw { .. } => "withdraw",
            Step::WithdrawMax { .. } => "withdraw_max",
            Step::Redeem { .. } => "redeem",
            Step::RedeemMax { .. } => "redeem_max",
            Step::Transfer { .. } => "transfer",
            Step::Yield { .. } => "yield",
            Step::Drain { .. } => "drain",
            Step::SetLiquidity { .. } => "set_liquidity",
            Step::SetFeeCollector { .. } => "set_fee_collector",
            Step::SetFeePct { .. } => "set_fee_pct",
            Step::TransferOwnership { .. } => "transfer_ownership",
            Step::Stray { .. } => "stray",
            Step::Rescue { .. } => "rescue",
        }
    }
}
