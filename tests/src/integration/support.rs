//! Shared fixture: an adapter over a fresh asset and vault.

use std::sync::Arc;

use fee_adapter::domain::check_supply_conservation;
use fee_adapter::{
    AdapterConfig, Address, FeeAdapter, FungibleToken, InMemoryToken, InMemoryVault,
    UnderlyingVault, ONE,
};
use primitive_types::U256;

pub const ADAPTER: Address = [0xAD; 20];
pub const VAULT: Address = [0x5A; 20];
pub const ASSET: Address = [0x70; 20];
pub const OWNER: Address = [0x0E; 20];
pub const COLLECTOR: Address = [0xC0; 20];
pub const ALICE: Address = [0xA1; 20];
pub const BOB: Address = [0xB0; 20];
pub const CAROL: Address = [0xCA; 20];

pub type Adapter = FeeAdapter<InMemoryVault, InMemoryToken>;

/// `n` whole units at 18 decimals.
pub fn units(n: u64) -> U256 {
    U256::from(n) * ONE
}

/// Parse a decimal integer literal.
pub fn dec(s: &str) -> U256 {
    U256::from_dec_str(s).unwrap()
}

/// `|a - b| <= tolerance`
pub fn approx_eq(a: U256, b: U256, tolerance: u64) -> bool {
    let diff = if a > b { a - b } else { b - a };
    diff <= U256::from(tolerance)
}

/// Asset, vault and adapter wired together.
pub struct World {
    pub asset: Arc<InMemoryToken>,
    pub vault: Arc<InMemoryVault>,
    pub adapter: Adapter,
}

impl World {
    /// 10% fee over a fully liquid vault.
    pub fn standard() -> Self {
        Self::with_factor(ONE / 10, ONE)
    }

    /// Custom fee over a vault with the given liquidity factor.
    pub fn with_factor(fee_pct: U256, factor: U256) -> Self {
        let asset = Arc::new(InMemoryToken::new(ASSET, "AST", 18));
        let vault =
            Arc::new(InMemoryVault::new(VAULT, asset.clone()).with_liquidity_factor(factor));
        let config = AdapterConfig::new(fee_pct, COLLECTOR, OWNER).unwrap();
        let adapter = FeeAdapter::new(ADAPTER, vault.clone(), asset.clone(), config).unwrap();
        Self {
            asset,
            vault,
            adapter,
        }
    }

    /// Mint `amount` of asset to `who` and approve the adapter for it all.
    pub fn fund(&self, who: &Address, amount: U256) {
        self.asset.mint(who, amount).unwrap();
        self.asset.approve(who, &ADAPTER, U256::MAX).unwrap();
    }

    /// Fund `who` and deposit straight into the vault, bypassing the adapter.
    pub fn deposit_direct(&self, who: &Address, amount: U256) -> U256 {
        self.asset.mint(who, amount).unwrap();
        self.asset.approve(who, &VAULT, amount).unwrap();
        self.vault.deposit(who, amount, who).unwrap()
    }

    /// Wallet balance of the asset.
    pub fn wallet(&self, who: &Address) -> U256 {
        self.asset.balance_of(who)
    }

    /// Vault shares held by the adapter.
    pub fn adapter_vault_shares(&self) -> U256 {
        self.vault.balance_of(&ADAPTER)
    }

    /// Ledger supply equals the sum of balances.
    pub fn assert_conserved(&self) {
        check_supply_conservation(self.adapter.ledger()).unwrap();
    }
}
