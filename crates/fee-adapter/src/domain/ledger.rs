//! # Share Ledger
//!
//! Balances, allowances and total supply of the adapter's claim token.
//!
//! `total_supply` always equals the sum of balances. Every mutation either
//! applies in full or returns an error before touching any entry, which lets
//! the service stage a call with the `ensure_*` checks and commit afterwards.

use super::errors::{AdapterError, Address, ZERO_ADDRESS};
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// ERC-20 style ledger for adapter shares.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLedger {
    balances: BTreeMap<Address, U256>,
    allowances: BTreeMap<(Address, Address), U256>,
    total_supply: U256,
}

impl ShareLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Outstanding shares.
    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Shares held by `holder`.
    pub fn balance_of(&self, holder: &Address) -> U256 {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    /// Shares `spender` may move on behalf of `owner`.
    pub fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Number of non-zero balances.
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Iterate over non-zero balances in address order.
    pub fn holders(&self) -> impl Iterator<Item = (&Address, &U256)> {
        self.balances.iter()
    }

    /// Sum of all balances.
    pub fn sum_of_balances(&self) -> Result<U256, AdapterError> {
        self.balances
            .values()
            .try_fold(U256::zero(), |acc, b| acc.checked_add(*b))
            .ok_or(AdapterError::Overflow)
    }

    /// Fails if `holder` cannot cover `amount`.
    pub fn ensure_balance(&self, holder: &Address, amount: U256) -> Result<(), AdapterError> {
        let available = self.balance_of(holder);
        if available < amount {
            return Err(AdapterError::InsufficientShares {
                holder: *holder,
                available,
                required: amount,
            });
        }
        Ok(())
    }

    /// Fails if `spender` cannot move `amount` for `owner`.
    pub fn ensure_allowance(
        &self,
        owner: &Address,
        spender: &Address,
        amount: U256,
    ) -> Result<(), AdapterError> {
        let available = self.allowance(owner, spender);
        if available < amount {
            return Err(AdapterError::InsufficientShareAllowance {
                spender: *spender,
                available,
                required: amount,
            });
        }
        Ok(())
    }

    /// Create `amount` shares for `to`.
    pub fn mint(&mut self, to: &Address, amount: U256) -> Result<(), AdapterError> {
        if *to == ZERO_ADDRESS {
            return Err(AdapterError::ReceiverZero);
        }
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(AdapterError::Overflow)?;
        if amount.is_zero() {
            return Ok(());
        }
        // Bounded by supply, so the balance cannot overflow.
        let balance = self.balance_of(to) + amount;
        self.balances.insert(*to, balance);
        self.total_supply = supply;
        Ok(())
    }

    /// Destroy `amount` shares held by `from`.
    pub fn burn(&mut self, from: &Address, amount: U256) -> Result<(), AdapterError> {
        self.ensure_balance(from, amount)?;
        self.set_balance(from, self.balance_of(from) - amount);
        self.total_supply -= amount;
        Ok(())
    }

    /// Move `amount` shares between holders.
    pub fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), AdapterError> {
        if *to == ZERO_ADDRESS {
            return Err(AdapterError::ReceiverZero);
        }
        self.ensure_balance(from, amount)?;
        if from == to {
            return Ok(());
        }
        self.set_balance(from, self.balance_of(from) - amount);
        self.set_balance(to, self.balance_of(to) + amount);
        Ok(())
    }

    /// Set the allowance of `spender` over `owner`'s shares.
    pub fn approve(
        &mut self,
        owner: &Address,
        spender: &Address,
        amount: U256,
    ) -> Result<(), AdapterError> {
        if *spender == ZERO_ADDRESS {
            return Err(AdapterError::SpenderZero);
        }
        if amount.is_zero() {
            self.allowances.remove(&(*owner, *spender));
        } else {
            self.allowances.insert((*owner, *spender), amount);
        }
        Ok(())
    }

    /// Consume allowance. `U256::MAX` is treated as infinite.
    pub fn spend_allowance(
        &mut self,
        owner: &Address,
        spender: &Address,
        amount: U256,
    ) -> Result<(), AdapterError> {
        let current = self.allowance(owner, spender);
        if current == U256::MAX {
            return Ok(());
        }
        self.ensure_allowance(owner, spender, amount)?;
        let remaining = current - amount;
        if remaining.is_zero() {
            self.allowances.remove(&(*owner, *spender));
        } else {
            self.allowances.insert((*owner, *spender), remaining);
        }
        Ok(())
    }

    fn set_balance(&mut self, holder: &Address, balance: U256) {
        if balance.is_zero() {
            self.balances.remove(holder);
        } else {
            self.balances.insert(*holder, balance);
        }
    }
}
