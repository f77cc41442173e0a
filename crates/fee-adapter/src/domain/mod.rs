//! # Domain Layer
//!
//! Pure accounting types for the fee adapter.
//!
//! ## Modules
//!
//! - `config`: Construction parameters and validation
//! - `entities`: Adapter state and fee accrual
//! - `errors`: Error taxonomy
//! - `events`: Event journal entries
//! - `invariants`: Accounting invariants
//! - `ledger`: Share balances, allowances and supply
//! - `value_objects`: Fixed-point constants, rounding, fee rate

pub mod config;
pub mod entities;
pub mod errors;
pub mod events;
pub mod invariants;
pub mod ledger;
pub mod value_objects;

pub use config::{AdapterConfig, AdapterConfigBuilder};
pub use entities::{AdapterState, FeeAccrual};
pub use errors::{
    fmt_address, AdapterError, Address, TokenError, NATIVE_TOKEN_ADDRESS, ZERO_ADDRESS,
};
pub use events::AdapterEvent;
pub use invariants::*;
pub use ledger::ShareLedger;
pub use value_objects::{format_units, parse_units, FeePct, Rounding, ONE, ONE_DECIMALS};
