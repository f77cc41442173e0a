//! # Outbound Ports
//!
//! Traits for the external ledgers the adapter drives: the underlying asset
//! and the yield-bearing vault.
//!
//! Implementations use interior mutability; every method takes `&self` so a
//! single token can be shared between the adapter, the vault and the caller.

use crate::domain::{Address, TokenError};
use primitive_types::U256;

/// Fungible token - outbound port.
pub trait FungibleToken: Send + Sync {
    /// Token address.
    fn address(&self) -> Address;

    /// Decimal precision.
    fn decimals(&self) -> u8;

    /// Outstanding supply.
    fn total_supply(&self) -> U256;

    /// Balance of `holder`.
    fn balance_of(&self, holder: &Address) -> U256;

    /// Amount `spender` may move for `owner`.
    fn allowance(&self, owner: &Address, spender: &Address) -> U256;

    /// Move `amount` from `sender` to `to`.
    fn transfer(&self, sender: &Address, to: &Address, amount: U256) -> Result<(), TokenError>;

    /// Set the allowance of `spender` over `owner`'s balance.
    fn approve(&self, owner: &Address, spender: &Address, amount: U256) -> Result<(), TokenError>;

    /// Move `amount` from `from` to `to` using `spender`'s allowance.
    fn transfer_from(
        &self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), TokenError>;
}

/// Yield-bearing vault - outbound port.
///
/// The vault's own claim token is exposed through the [`FungibleToken`]
/// supertrait.
pub trait UnderlyingVault: FungibleToken {
    /// Address of the asset the vault accepts.
    fn asset(&self) -> Address;

    /// Assets under management.
    fn total_assets(&self) -> U256;

    /// Vault shares worth `assets` (floor, saturating).
    fn convert_to_shares(&self, assets: U256) -> U256;

    /// Assets backing `shares` (floor, saturating).
    fn convert_to_assets(&self, shares: U256) -> U256;

    /// Largest withdrawal `holder` can make right now.
    fn max_withdraw(&self, holder: &Address) -> U256;

    /// Pull `assets` from `caller` and issue vault shares to `receiver`.
    fn deposit(&self, caller: &Address, assets: U256, receiver: &Address)
        -> Result<U256, TokenError>;

    /// Burn `owner`'s vault shares and send `assets` to `receiver`.
    fn withdraw(
        &self,
        caller: &Address,
        assets: U256,
        receiver: &Address,
        owner: &Address,
    ) -> Result<U256, TokenError>;
}
