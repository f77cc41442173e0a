//! # Inbound Ports
//!
//! Public API of the fee adapter.
//!
//! Views report the state as if pending fees were already settled, so a
//! holder's quote does not move when settlement actually happens. Mutating
//! calls take `&mut self` and an explicit `caller`.

use super::outbound::FungibleToken;
use crate::domain::{AdapterError, Address};
use primitive_types::U256;

/// Fee adapter API - inbound port.
pub trait FeeAdapterApi {
    // =========================================================================
    // Share token
    // =========================================================================

    /// Share decimals, captured from the asset at construction.
    fn decimals(&self) -> u8;

    /// Outstanding shares including pending fee shares.
    fn total_supply(&self) -> Result<U256, AdapterError>;

    /// Shares of `holder`, including pending fee shares for the collector.
    fn balance_of(&self, holder: &Address) -> Result<U256, AdapterError>;

    /// Share allowance.
    fn allowance(&self, owner: &Address, spender: &Address) -> U256;

    /// Move shares from `caller` to `to`.
    fn transfer(&mut self, caller: &Address, to: &Address, amount: U256)
        -> Result<(), AdapterError>;

    /// Allow `spender` to move `caller`'s shares.
    fn approve(
        &mut self,
        caller: &Address,
        spender: &Address,
        amount: U256,
    ) -> Result<(), AdapterError>;

    /// Move shares from `from` to `to` using `caller`'s allowance.
    fn transfer_from(
        &mut self,
        caller: &Address,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), AdapterError>;

    // =========================================================================
    // Valuation and conversion
    // =========================================================================

    /// Live asset value of the adapter's vault claim.
    fn total_assets(&self) -> U256;

    /// Last settled valuation.
    fn previous_total_assets(&self) -> U256;

    /// Shares worth `assets` (floor).
    fn convert_to_shares(&self, assets: U256) -> Result<U256, AdapterError>;

    /// Assets backing `shares` (floor).
    fn convert_to_assets(&self, shares: U256) -> Result<U256, AdapterError>;

    /// Shares a deposit of `assets` would mint.
    fn preview_deposit(&self, assets: U256) -> Result<U256, AdapterError>;

    /// Assets a mint of `shares` would pull.
    fn preview_mint(&self, shares: U256) -> Result<U256, AdapterError>;

    /// Shares a withdrawal of `assets` would burn.
    fn preview_withdraw(&self, assets: U256) -> Result<U256, AdapterError>;

    /// Assets a redemption of `shares` would pay.
    fn preview_redeem(&self, shares: U256) -> Result<U256, AdapterError>;

    // =========================================================================
    // Limits
    // =========================================================================

    /// Deposits are unbounded.
    fn max_deposit(&self, receiver: &Address) -> U256;

    /// Mints are unbounded.
    fn max_mint(&self, receiver: &Address) -> U256;

    /// `owner`'s claim, clamped to vault liquidity.
    fn max_withdraw(&self, owner: &Address) -> Result<U256, AdapterError>;

    /// Shares `owner` can redeem within the liquidity clamp.
    fn max_redeem(&self, owner: &Address) -> Result<U256, AdapterError>;

    // =========================================================================
    // Deposit / withdraw
    // =========================================================================

    /// Deposit `assets` from `caller`, minting shares to `receiver`.
    fn deposit(
        &mut self,
        caller: &Address,
        assets: U256,
        receiver: &Address,
    ) -> Result<U256, AdapterError>;

    /// Mint exactly `shares` to `receiver`, pulling assets from `caller`.
    fn mint(
        &mut self,
        caller: &Address,
        shares: U256,
        receiver: &Address,
    ) -> Result<U256, AdapterError>;

    /// Withdraw exactly `assets` to `receiver`, burning `owner`'s shares.
    fn withdraw(
        &mut self,
        caller: &Address,
        assets: U256,
        receiver: &Address,
        owner: &Address,
    ) -> Result<U256, AdapterError>;

    /// Redeem exactly `shares` of `owner`, paying assets to `receiver`.
    fn redeem(
        &mut self,
        caller: &Address,
        shares: U256,
        receiver: &Address,
        owner: &Address,
    ) -> Result<U256, AdapterError>;

    // =========================================================================
    // Administration
    // =========================================================================

    /// Current fee rate.
    fn fee_pct(&self) -> U256;

    /// Current fee collector.
    fn fee_collector(&self) -> Address;

    /// Current owner.
    fn owner(&self) -> Address;

    /// Whether `caller` may administer the adapter.
    fn authorized(&self, caller: &Address) -> bool;

    /// Settle to the outgoing collector, then replace it.
    fn set_fee_collector(&mut self, caller: &Address, collector: &Address)
        -> Result<(), AdapterError>;

    /// Settle at the old rate, then lower it.
    fn set_fee_pct(&mut self, caller: &Address, pct: U256) -> Result<(), AdapterError>;

    /// Hand administration to `new_owner`.
    fn transfer_ownership(&mut self, caller: &Address, new_owner: &Address)
        -> Result<(), AdapterError>;

    /// Sweep a stray token balance held by the adapter.
    fn rescue_funds(
        &mut self,
        caller: &Address,
        token: &dyn FungibleToken,
        recipient: &Address,
        amount: U256,
    ) -> Result<(), AdapterError>;
}
