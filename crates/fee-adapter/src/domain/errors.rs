//! # Domain Errors
//!
//! Error types for the fee adapter and the external ledgers it drives.
//!
//! Every variant aborts the triggering call as a whole; nothing is retried
//! internally. [`AdapterError::kind`] groups variants into the taxonomy used
//! for logging and metrics labels.

use primitive_types::U256;
use thiserror::Error;

/// Address type (20-byte) for accounts and tokens.
pub type Address = [u8; 20];

/// The null account.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// Placeholder address for the chain's native coin.
pub const NATIVE_TOKEN_ADDRESS: Address = [0xEE; 20];

/// Render an address as `0x`-prefixed hex.
pub fn fmt_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

/// Errors raised by an external token or vault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Holder balance is below the transfer amount.
    #[error("insufficient balance for {}: available {available}, required {required}", fmt_address(.holder))]
    InsufficientBalance {
        /// Account being debited
        holder: Address,
        /// Current balance
        available: U256,
        /// Requested amount
        required: U256,
    },

    /// Spender allowance is below the transfer amount.
    #[error("insufficient allowance for {}: available {available}, required {required}", fmt_address(.spender))]
    InsufficientAllowance {
        /// Account spending on behalf of the holder
        spender: Address,
        /// Current allowance
        available: U256,
        /// Requested amount
        required: U256,
    },

    /// A zero address was passed where an account is required.
    #[error("zero address not allowed as {0}")]
    ZeroAddress(&'static str),

    /// Vault cannot honor a withdrawal of this size.
    #[error("withdraw exceeds vault limit: requested {requested}, max {max}")]
    ExceedsMaxWithdraw {
        /// Requested assets
        requested: U256,
        /// Vault liquidity ceiling for the holder
        max: U256,
    },

    /// Balance or supply arithmetic overflowed.
    #[error("token arithmetic overflow")]
    Overflow,

    /// Generic external failure.
    #[error("external call failed: {0}")]
    CallFailed(String),
}

/// Fee adapter error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// Zero amount passed to an operation that moves value.
    #[error("amount must be greater than zero")]
    AmountZero,

    /// Fee collector cannot be the null account.
    #[error("fee collector cannot be the zero address")]
    CollectorZero,

    /// Owner cannot be the null account.
    #[error("owner cannot be the zero address")]
    OwnerZero,

    /// Share or asset receiver cannot be the null account.
    #[error("receiver cannot be the zero address")]
    ReceiverZero,

    /// Share allowance spender cannot be the null account.
    #[error("spender cannot be the zero address")]
    SpenderZero,

    /// Rescue recipient cannot be the null account.
    #[error("recipient cannot be the zero address")]
    RecipientZero,

    /// Rescue token cannot be the null address.
    #[error("token cannot be the zero address")]
    TokenZero,

    /// Fee percentage of zero after construction.
    #[error("fee percentage cannot be zero")]
    FeePctZero,

    /// Fee percentage above 100%.
    #[error("fee percentage {pct} is above one")]
    FeePctAboveOne {
        /// Rejected percentage
        pct: U256,
    },

    /// Fee percentage may only ratchet down.
    #[error("fee percentage {pct} is above previous {previous}")]
    FeePctAbovePrevious {
        /// Rejected percentage
        pct: U256,
        /// Percentage in force
        previous: U256,
    },

    /// Operation would mint no shares.
    #[error("operation would mint zero shares")]
    ZeroShares,

    /// Operation would move no assets.
    #[error("operation would move zero assets")]
    ZeroAssets,

    /// Amount string could not be parsed.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Underlying vault does not accept the configured asset.
    #[error("vault asset {} does not match asset {}", fmt_address(.vault_asset), fmt_address(.asset))]
    AssetMismatch {
        /// Asset reported by the vault
        vault_asset: Address,
        /// Asset handed to the adapter
        asset: Address,
    },

    /// Snapshot was taken over different external ledgers.
    #[error("snapshot {field} mismatch: recorded {recorded}, found {found}")]
    SnapshotMismatch {
        /// Mismatched binding (`asset`, `vault` or `decimals`)
        field: &'static str,
        /// Value stored in the snapshot
        recorded: String,
        /// Value of the ledger handed to `restore`
        found: String,
    },

    /// Caller is not the owner.
    #[error("caller {} is not the owner", fmt_address(.caller))]
    Unauthorized {
        /// Rejected caller
        caller: Address,
    },

    /// Rescue targeted the underlying vault claim token.
    #[error("token {} is the underlying vault claim token", fmt_address(.token))]
    TokenIsUnderlyingVault {
        /// Protected token
        token: Address,
    },

    /// Withdrawal above the liquidity clamp.
    #[error("withdraw of {requested} exceeds max {max}")]
    ExceedsMaxWithdraw {
        /// Requested assets
        requested: U256,
        /// Clamped maximum
        max: U256,
    },

    /// Redemption above the liquidity clamp.
    #[error("redeem of {requested} shares exceeds max {max}")]
    ExceedsMaxRedeem {
        /// Requested shares
        requested: U256,
        /// Clamped maximum
        max: U256,
    },

    /// Adapter holds no assets backing outstanding shares.
    #[error("no assets back {supply} outstanding shares")]
    ZeroValuation {
        /// Outstanding share supply
        supply: U256,
    },

    /// Share balance below the burn or transfer amount.
    #[error("insufficient shares for {}: available {available}, required {required}", fmt_address(.holder))]
    InsufficientShares {
        /// Account being debited
        holder: Address,
        /// Current balance
        available: U256,
        /// Requested amount
        required: U256,
    },

    /// Share allowance below the spend amount.
    #[error("insufficient share allowance for {}: available {available}, required {required}", fmt_address(.spender))]
    InsufficientShareAllowance {
        /// Spender
        spender: Address,
        /// Current allowance
        available: U256,
        /// Requested amount
        required: U256,
    },

    /// 256-bit overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Restored ledger does not conserve supply.
    #[error("ledger supply {supply} does not match balance sum {balances}")]
    SupplyMismatch {
        /// Recorded total supply
        supply: U256,
        /// Sum of balances
        balances: U256,
    },

    /// Snapshot encode/decode failure.
    #[error("snapshot serialization failed: {0}")]
    Serialization(String),

    /// Failure propagated from the underlying asset or vault.
    #[error("external ledger: {0}")]
    Token(#[from] TokenError),
}

impl AdapterError {
    /// Taxonomy label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AmountZero
            | Self::CollectorZero
            | Self::OwnerZero
            | Self::ReceiverZero
            | Self::SpenderZero
            | Self::RecipientZero
            | Self::TokenZero
            | Self::FeePctZero
            | Self::FeePctAboveOne { .. }
            | Self::FeePctAbovePrevious { .. }
            | Self::ZeroShares
            | Self::ZeroAssets
            | Self::InvalidAmount(_)
            | Self::AssetMismatch { .. }
            | Self::SnapshotMismatch { .. } => "parameter",
            Self::Unauthorized { .. } => "authorization",
            Self::TokenIsUnderlyingVault { .. } => "protected_asset",
            Self::ExceedsMaxWithdraw { .. }
            | Self::ExceedsMaxRedeem { .. }
            | Self::ZeroValuation { .. } => "liquidity",
            Self::InsufficientShares { .. } | Self::InsufficientShareAllowance { .. } => {
                "insufficient_balance"
            }
            Self::Overflow | Self::DivisionByZero => "arithmetic",
            Self::SupplyMismatch { .. } | Self::Serialization(_) => "serialization",
            Self::Token(_) => "external",
        }
    }
}
