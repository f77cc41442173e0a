//! In-memory ERC-4626 vault over an [`InMemoryToken`].
//!
//! Yield and losses are modelled by minting or burning the asset balance the
//! vault holds. `liquidity_factor` scales every holder's withdrawal ceiling
//! (`0.5` is a vault that can only return half of what it owes, `2.0` one that
//! reports more liquidity than the holder's claim).

use super::token::{InMemoryToken, TokenBook};
use crate::algorithms::mul_div;
use crate::domain::{Address, Rounding, TokenError, ONE};
use crate::ports::{FungibleToken, UnderlyingVault};
use parking_lot::RwLock;
use primitive_types::U256;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Yield vault held in memory.
pub struct InMemoryVault {
    address: Address,
    asset: Arc<InMemoryToken>,
    shares: RwLock<TokenBook>,
    liquidity_factor: RwLock<U256>,
    fail_deposits: AtomicBool,
}

impl InMemoryVault {
    /// Create a fully liquid vault for `asset`.
    pub fn new(address: Address, asset: Arc<InMemoryToken>) -> Self {
        Self {
            address,
            asset,
            shares: RwLock::new(TokenBook::default()),
            liquidity_factor: RwLock::new(ONE),
            fail_deposits: AtomicBool::new(false),
        }
    }

    /// Builder-style method to set the liquidity factor
    pub fn with_liquidity_factor(self, factor: U256) -> Self {
        *self.liquidity_factor.write() = factor;
        self
    }

    /// Fraction of each claim that can be withdrawn, scaled by `ONE`.
    pub fn liquidity_factor(&self) -> U256 {
        *self.liquidity_factor.read()
    }

    /// Change the liquidity factor.
    pub fn set_liquidity_factor(&self, factor: U256) {
        *self.liquidity_factor.write() = factor;
    }

    /// Make every subsequent deposit fail until cleared.
    pub fn set_fail_deposits(&self, fail: bool) {
        self.fail_deposits.store(fail, Ordering::SeqCst);
    }

    /// Underlying asset.
    pub fn asset_token(&self) -> &Arc<InMemoryToken> {
        &self.asset
    }

    /// Credit yield to all vault shareholders.
    pub fn accrue_yield(&self, assets: U256) -> Result<(), TokenError> {
        debug!(%assets, "vault yield");
        self.asset.mint(&self.address, assets)
    }

    /// Remove assets from the vault, spreading the loss over all shareholders.
    pub fn drain(&self, assets: U256) -> Result<(), TokenError> {
        debug!(%assets, "vault drain");
        self.asset.burn(&self.address, assets)
    }

    /// Destroy vault shares held by `holder` without paying anything out.
    pub fn burn_shares(&self, holder: &Address, shares: U256) -> Result<(), TokenError> {
        debug!(holder = %hex::encode(holder), %shares, "vault share burn");
        self.shares.write().burn(holder, shares)
    }

    fn to_shares(&self, assets: U256, rounding: Rounding) -> Result<U256, TokenError> {
        let supply = self.shares.read().total_supply();
        if supply.is_zero() {
            return Ok(assets);
        }
        mul_div(assets, supply, self.total_assets(), rounding).map_err(|err| {
            TokenError::CallFailed(format!("vault share conversion: {err}"))
        })
    }

    fn to_assets(&self, shares: U256) -> U256 {
        let supply = self.shares.read().total_supply();
        if supply.is_zero() {
            return shares;
        }
        mul_div(shares, self.total_assets(), supply, Rounding::Floor).unwrap_or(U256::MAX)
    }
}

impl FungibleToken for InMemoryVault {
    fn address(&self) -> Address {
        self.address
    }

    fn decimals(&self) -> u8 {
        self.asset.decimals()
    }

    fn total_supply(&self) -> U256 {
        self.shares.read().total_supply()
    }

    fn balance_of(&self, holder: &Address) -> U256 {
        self.shares.read().balance_of(holder)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.shares.read().allowance(owner, spender)
    }

    fn transfer(&self, sender: &Address, to: &Address, amount: U256) -> Result<(), TokenError> {
        self.shares.write().transfer(sender, to, amount)
    }

    fn approve(&self, owner: &Address, spender: &Address, amount: U256) -> Result<(), TokenError> {
        self.shares.write().approve(owner, spender, amount)
    }

    fn transfer_from(
        &self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        self.shares.write().transfer_from(spender, from, to, amount)
    }
}

impl UnderlyingVault for InMemoryVault {
    fn asset(&self) -> Address {
        self.asset.address()
    }

    fn total_assets(&self) -> U256 {
        self.asset.balance_of(&self.address)
    }

    fn convert_to_shares(&self, assets: U256) -> U256 {
        self.to_shares(assets, Rounding::Floor)
            .unwrap_or(U256::MAX)
    }

    fn convert_to_assets(&self, shares: U256) -> U256 {
        self.to_assets(shares)
    }

    fn max_withdraw(&self, holder: &Address) -> U256 {
        let claim = self.to_assets(self.balance_of(holder));
        mul_div(claim, self.liquidity_factor(), ONE, Rounding::Floor).unwrap_or(U256::MAX)
    }

    fn deposit(
        &self,
        caller: &Address,
        assets: U256,
        receiver: &Address,
    ) -> Result<U256, TokenError> {
        if self.fail_deposits.load(Ordering::SeqCst) {
            return Err(TokenError::CallFailed("vault deposits are disabled".into()));
        }

        let shares = self.to_shares(assets, Rounding::Floor)?;
        self.asset
            .transfer_from(&self.address, caller, &self.address, assets)?;
        self.shares.write().mint(receiver, shares)?;
        Ok(shares)
    }

    fn withdraw(
        &self,
        caller: &Address,
        assets: U256,
        receiver: &Address,
        owner: &Address,
    ) -> Result<U256, TokenError> {
        let max = self.max_withdraw(owner);
        if assets > max {
            return Err(TokenError::ExceedsMaxWithdraw {
                requested: assets,
                max,
            });
        }

        let shares = self.to_shares(assets, Rounding::Ceil)?;
        {
            let book = self.shares.read();
            book.ensure_balance(owner, shares)?;
            if caller != owner {
                book.ensure_allowance(owner, caller, shares)?;
            }
        }

        self.asset.transfer(&self.address, receiver, assets)?;

        let mut book = self.shares.write();
        if caller != owner {
            book.spend_allowance(owner, caller, shares)?;
        }
        book.burn(owner, shares)?;
        Ok(shares)
    }
}
