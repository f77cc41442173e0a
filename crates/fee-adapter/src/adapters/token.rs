//! In-memory ERC-20 token.
//!
//! Backs the underlying asset in tests and the simulator, and provides the
//! balance book reused by [`InMemoryVault`](super::InMemoryVault) for its
//! claim token.

use crate::domain::{Address, TokenError, NATIVE_TOKEN_ADDRESS, ZERO_ADDRESS};
use crate::ports::FungibleToken;
use parking_lot::RwLock;
use primitive_types::U256;
use std::collections::HashMap;

/// Balances, allowances and supply of a fungible token.
#[derive(Debug, Default, Clone)]
pub(crate) struct TokenBook {
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
    total_supply: U256,
}

impl TokenBook {
    pub(crate) fn total_supply(&self) -> U256 {
        self.total_supply
    }

    pub(crate) fn balance_of(&self, holder: &Address) -> U256 {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    pub(crate) fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    pub(crate) fn ensure_balance(&self, holder: &Address, amount: U256) -> Result<(), TokenError> {
        let available = self.balance_of(holder);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                holder: *holder,
                available,
                required: amount,
            });
        }
        Ok(())
    }

    pub(crate) fn ensure_allowance(
        &self,
        owner: &Address,
        spender: &Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        let available = self.allowance(owner, spender);
        if available < amount {
            return Err(TokenError::InsufficientAllowance {
                spender: *spender,
                available,
                required: amount,
            });
        }
        Ok(())
    }

    pub(crate) fn mint(&mut self, to: &Address, amount: U256) -> Result<(), TokenError> {
        if *to == ZERO_ADDRESS {
            return Err(TokenError::ZeroAddress("mint recipient"));
        }
        self.total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        *self.balances.entry(*to).or_default() += amount;
        Ok(())
    }

    pub(crate) fn burn(&mut self, from: &Address, amount: U256) -> Result<(), TokenError> {
        self.ensure_balance(from, amount)?;
        *self.balances.entry(*from).or_default() -= amount;
        self.total_supply -= amount;
        Ok(())
    }

    pub(crate) fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        if *to == ZERO_ADDRESS {
            return Err(TokenError::ZeroAddress("recipient"));
        }
        self.ensure_balance(from, amount)?;
        *self.balances.entry(*from).or_default() -= amount;
        *self.balances.entry(*to).or_default() += amount;
        Ok(())
    }

    pub(crate) fn approve(
        &mut self,
        owner: &Address,
        spender: &Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        if *spender == ZERO_ADDRESS {
            return Err(TokenError::ZeroAddress("spender"));
        }
        self.allowances.insert((*owner, *spender), amount);
        Ok(())
    }

    pub(crate) fn spend_allowance(
        &mut self,
        owner: &Address,
        spender: &Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        let current = self.allowance(owner, spender);
        if current == U256::MAX {
            return Ok(());
        }
        self.ensure_allowance(owner, spender, amount)?;
        self.allowances.insert((*owner, *spender), current - amount);
        Ok(())
    }

    pub(crate) fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        if *to == ZERO_ADDRESS {
            return Err(TokenError::ZeroAddress("recipient"));
        }
        self.ensure_balance(from, amount)?;
        self.ensure_allowance(from, spender, amount)?;
        self.spend_allowance(from, spender, amount)?;
        self.transfer(from, to, amount)
    }
}

/// ERC-20 token held in memory.
pub struct InMemoryToken {
    address: Address,
    symbol: String,
    decimals: u8,
    book: RwLock<TokenBook>,
}

impl InMemoryToken {
    /// Create an empty token.
    pub fn new(address: Address, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            address,
            symbol: symbol.into(),
            decimals,
            book: RwLock::new(TokenBook::default()),
        }
    }

    /// Native coin balances, exposed through the same port so the adapter can
    /// sweep them like any other token.
    pub fn native() -> Self {
        Self::new(NATIVE_TOKEN_ADDRESS, "ETH", 18)
    }

    /// Ticker symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Create `amount` tokens for `to`.
    pub fn mint(&self, to: &Address, amount: U256) -> Result<(), TokenError> {
        self.book.write().mint(to, amount)
    }

    /// Destroy `amount` tokens held by `from`.
    pub fn burn(&self, from: &Address, amount: U256) -> Result<(), TokenError> {
        self.book.write().burn(from, amount)
    }
}

impl FungibleToken for InMemoryToken {
    fn address(&self) -> Address {
        self.address
    }

    fn decimals(&self) -> u8 {
        self.decimals
    }

    fn total_supply(&self) -> U256 {
        self.book.read().total_supply()
    }

    fn balance_of(&self, holder: &Address) -> U256 {
        self.book.read().balance_of(holder)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.book.read().allowance(owner, spender)
    }

    fn transfer(&self, sender: &Address, to: &Address, amount: U256) -> Result<(), TokenError> {
        self.book.write().transfer(sender, to, amount)
    }

    fn approve(&self, owner: &Address, spender: &Address, amount: U256) -> Result<(), TokenError> {
        self.book.write().approve(owner, spender, amount)
    }

    fn transfer_from(
        &self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        self.book.write().transfer_from(spender, from, to, amount)
    }
}
