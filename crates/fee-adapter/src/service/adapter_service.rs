//! Fee Adapter Service
//!
//! Orchestrates the share ledger, the fee settlement engine and the external
//! asset and vault.
//!
//! Every mutating call follows the same shape:
//!
//! 1. **Stage**: price pending fees and run every check against the settled
//!    view, without touching state.
//! 2. **External**: move assets through the asset and vault ports.
//! 3. **Commit**: mint fee shares, apply the ledger change, advance the
//!    checkpoint to the live valuation and journal events.
//!
//! A failure in steps 1 or 2 leaves the ledger and checkpoint untouched.

use std::sync::Arc;

use primitive_types::U256;
use tracing::{debug, error, info, warn};

use crate::algorithms::{assets_to_shares, compute_fee_accrual, share_price, shares_to_assets};
use crate::domain::{
    check_fee_pct_update, fmt_address, invariant_within_clamp, AdapterConfig, AdapterError,
    AdapterEvent, AdapterState, Address, FeeAccrual, Rounding, ShareLedger, ZERO_ADDRESS,
};
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{FeeAdapterApi, FungibleToken, UnderlyingVault};

/// Staged fee settlement.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Settlement {
    pub(crate) accrual: FeeAccrual,
    /// Collector credited with `accrual.fee_shares`.
    pub(crate) collector: Address,
    /// Share supply once the fee shares are minted.
    pub(crate) supply: U256,
}

impl Settlement {
    fn valuation(&self) -> U256 {
        self.accrual.valuation
    }
}

/// Performance-fee adapter over an ERC-4626 style vault.
///
/// Implements the `FeeAdapterApi` port using injected vault and asset ports.
pub struct FeeAdapter<V: UnderlyingVault, A: FungibleToken> {
    /// Adapter account on the external ledgers
    pub(crate) address: Address,
    /// Yield vault (driven port)
    pub(crate) vault: Arc<V>,
    /// Underlying asset (driven port)
    pub(crate) asset: Arc<A>,
    /// Share decimals, fixed at construction
    pub(crate) decimals: u8,
    pub(crate) ledger: ShareLedger,
    pub(crate) state: AdapterState,
    pub(crate) events: Vec<AdapterEvent>,
    pub(crate) metrics: Arc<dyn MetricsRecorder>,
}

impl<V: UnderlyingVault, A: FungibleToken> FeeAdapter<V, A> {
    /// Create an adapter with no shares outstanding and a zero checkpoint.
    ///
    /// Rejects a fee above 100%, a zero collector, a zero owner and a vault
    /// that does not accept `asset`, in that order.
    pub fn new(
        address: Address,
        vault: Arc<V>,
        asset: Arc<A>,
        config: AdapterConfig,
    ) -> Result<Self, AdapterError> {
        let state = AdapterState::from_config(&config)?;
        Self::check_asset(vault.as_ref(), asset.as_ref())?;

        let decimals = asset.decimals();
        info!(
            adapter = %fmt_address(&address),
            vault = %fmt_address(&vault.address()),
            fee_pct = %state.fee_pct,
            decimals,
            "fee adapter created"
        );

        Ok(Self {
            address,
            vault,
            asset,
            decimals,
            ledger: ShareLedger::new(),
            state,
            events: Vec::new(),
            metrics: Arc::new(NoOpMetrics),
        })
    }

    /// Replace the metrics recorder.
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    pub(crate) fn check_asset(vault: &V, asset: &A) -> Result<(), AdapterError> {
        if vault.asset() != asset.address() {
            return Err(AdapterError::AssetMismatch {
                vault_asset: vault.asset(),
                asset: asset.address(),
            });
        }
        Ok(())
    }

    /// Adapter account.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Underlying vault.
    pub fn vault(&self) -> &Arc<V> {
        &self.vault
    }

    /// Underlying asset.
    pub fn asset(&self) -> &Arc<A> {
        &self.asset
    }

    /// Committed share ledger (pending fees excluded).
    pub fn ledger(&self) -> &ShareLedger {
        &self.ledger
    }

    /// Committed adapter state.
    pub fn state(&self) -> &AdapterState {
        &self.state
    }

    /// Journaled events not yet drained.
    pub fn events(&self) -> &[AdapterEvent] {
        &self.events
    }

    /// Drain the event journal.
    pub fn take_events(&mut self) -> Vec<AdapterEvent> {
        std::mem::take(&mut self.events)
    }

    /// Fee shares the next settlement would mint.
    pub fn pending_fee_shares(&self) -> Result<U256, AdapterError> {
        Ok(self.stage_settlement()?.accrual.fee_shares)
    }

    /// Assets per share, scaled by `ONE`, in the settled view.
    pub fn share_price(&self) -> Result<U256, AdapterError> {
        let settlement = self.stage_settlement()?;
        share_price(settlement.supply, settlement.valuation())
    }

    // =========================================================================
    // Settlement
    // =========================================================================

    fn valuation(&self) -> U256 {
        self.vault
            .convert_to_assets(self.vault.balance_of(&self.address))
    }

    /// Price pending fees against the live valuation without mutating state.
    pub(crate) fn stage_settlement(&self) -> Result<Settlement, AdapterError> {
        let supply = self.ledger.total_supply();
        let accrual = compute_fee_accrual(
            self.valuation(),
            self.state.previous_total_assets,
            self.state.fee_pct,
            supply,
        )?;
        let supply = supply
            .checked_add(accrual.fee_shares)
            .ok_or(AdapterError::Overflow)?;

        Ok(Settlement {
            accrual,
            collector: self.state.fee_collector,
            supply,
        })
    }

    fn commit_settlement(&mut self, settlement: &Settlement) -> Result<(), AdapterError> {
        let accrual = &settlement.accrual;
        if accrual.is_empty() {
            return Ok(());
        }

        self.ledger.mint(&settlement.collector, accrual.fee_shares)?;
        self.emit(AdapterEvent::Transfer {
            from: ZERO_ADDRESS,
            to: settlement.collector,
            amount: accrual.fee_shares,
        });
        self.emit(AdapterEvent::FeesSettled {
            collector: settlement.collector,
            amount: accrual.fee_shares,
        });
        self.metrics.record_fee_settlement();

        info!(
            collector = %fmt_address(&settlement.collector),
            gain = %accrual.gain,
            fee_assets = %accrual.fee_assets,
            fee_shares = %accrual.fee_shares,
            "fees settled"
        );
        Ok(())
    }

    fn advance_checkpoint(&mut self) {
        let valuation = self.valuation();
        debug!(
            previous = %self.state.previous_total_assets,
            current = %valuation,
            "checkpoint advanced"
        );
        self.state.previous_total_assets = valuation;
    }

    /// Settle, advance the checkpoint and return. Used by calls that move no
    /// principal.
    fn settle_in_place(&mut self, settlement: &Settlement) -> Result<(), AdapterError> {
        self.commit_settlement(settlement)?;
        self.advance_checkpoint();
        Ok(())
    }

    // =========================================================================
    // Settled view helpers
    // =========================================================================

    fn settled_balance(&self, settlement: &Settlement, holder: &Address) -> U256 {
        let balance = self.ledger.balance_of(holder);
        if *holder == settlement.collector {
            balance + settlement.accrual.fee_shares
        } else {
            balance
        }
    }

    fn max_withdraw_with(
        &self,
        settlement: &Settlement,
        owner: &Address,
    ) -> Result<U256, AdapterError> {
        let claim = shares_to_assets(
            self.settled_balance(settlement, owner),
            settlement.supply,
            settlement.valuation(),
            Rounding::Floor,
        )?;
        Ok(claim.min(self.vault.max_withdraw(&self.address)))
    }

    fn max_redeem_with(
        &self,
        settlement: &Settlement,
        owner: &Address,
    ) -> Result<U256, AdapterError> {
        let balance = self.settled_balance(settlement, owner);
        let claim = shares_to_assets(
            balance,
            settlement.supply,
            settlement.valuation(),
            Rounding::Floor,
        )?;
        let limit = self.vault.max_withdraw(&self.address);
        let shares = assets_to_shares(
            claim.min(limit),
            settlement.supply,
            settlement.valuation(),
            Rounding::Floor,
        )?
        .min(balance);
        // An unclamped holder one rounding unit short of a full exit may
        // redeem everything.
        if claim <= limit && balance - shares <= U256::one() {
            return Ok(balance);
        }
        Ok(shares)
    }

    fn ensure_spendable(
        &self,
        settlement: &Settlement,
        caller: &Address,
        owner: &Address,
        shares: U256,
    ) -> Result<(), AdapterError> {
        let available = self.settled_balance(settlement, owner);
        if available < shares {
            return Err(AdapterError::InsufficientShares {
                holder: *owner,
                available,
                required: shares,
            });
        }
        if caller != owner {
            self.ledger.ensure_allowance(owner, caller, shares)?;
        }
        Ok(())
    }

    // =========================================================================
    // External asset movement
    // =========================================================================

    /// Pull `assets` from `payer` and deposit them into the vault.
    ///
    /// If the vault step fails the pulled assets are returned to `payer`.
    fn pull_into_vault(&self, payer: &Address, assets: U256) -> Result<(), AdapterError> {
        self.asset
            .transfer_from(&self.address, payer, &self.address, assets)?;

        let vault_address = self.vault.address();
        let deposited = self
            .asset
            .approve(&self.address, &vault_address, assets)
            .and_then(|_| self.vault.deposit(&self.address, assets, &self.address));

        if let Err(err) = deposited {
            warn!(
                payer = %fmt_address(payer),
                %assets,
                error = %err,
                "vault deposit failed, refunding payer"
            );
            if let Err(reset) = self.asset.approve(&self.address, &vault_address, U256::zero()) {
                warn!(error = %reset, "failed to reset vault allowance");
            }
            if let Err(refund) = self.asset.transfer(&self.address, payer, assets) {
                error!(
                    payer = %fmt_address(payer),
                    %assets,
                    error = %refund,
                    "refund after failed vault deposit failed"
                );
            }
            return Err(err.into());
        }
        Ok(())
    }

    // =========================================================================
    // Bookkeeping
    // =========================================================================

    fn emit(&mut self, event: AdapterEvent) {
        debug!(event = event.name(), "event");
        self.events.push(event);
    }

    fn ensure_owner(&self, caller: &Address) -> Result<(), AdapterError> {
        if !self.authorized(caller) {
            return Err(AdapterError::Unauthorized { caller: *caller });
        }
        Ok(())
    }

    fn observe<T>(
        &self,
        operation: &'static str,
        result: Result<T, AdapterError>,
    ) -> Result<T, AdapterError> {
        if let Err(err) = &result {
            warn!(operation, kind = err.kind(), error = %err, "call rejected");
            self.metrics.record_failure(operation, err.kind());
        }
        result
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn do_deposit(
        &mut self,
        caller: &Address,
        assets: U256,
        receiver: &Address,
    ) -> Result<U256, AdapterError> {
        if assets.is_zero() {
            return Err(AdapterError::AmountZero);
        }
        if *receiver == ZERO_ADDRESS {
            return Err(AdapterError::ReceiverZero);
        }

        let settlement = self.stage_settlement()?;
        let shares = assets_to_shares(
            assets,
            settlement.supply,
            settlement.valuation(),
            Rounding::Floor,
        )?;
        if shares.is_zero() {
            return Err(AdapterError::ZeroShares);
        }
        settlement
            .supply
            .checked_add(shares)
            .ok_or(AdapterError::Overflow)?;

        self.pull_into_vault(caller, assets)?;
        self.commit_issue(&settlement, caller, receiver, assets, shares)?;
        Ok(shares)
    }

    fn do_mint(
        &mut self,
        caller: &Address,
        shares: U256,
        receiver: &Address,
    ) -> Result<U256, AdapterError> {
        if shares.is_zero() {
            return Err(AdapterError::AmountZero);
        }
        if *receiver == ZERO_ADDRESS {
            return Err(AdapterError::ReceiverZero);
        }

        let settlement = self.stage_settlement()?;
        let assets = shares_to_assets(
            shares,
            settlement.supply,
            settlement.valuation(),
            Rounding::Ceil,
        )?;
        if assets.is_zero() {
            return Err(AdapterError::ZeroAssets);
        }
        settlement
            .supply
            .checked_add(shares)
            .ok_or(AdapterError::Overflow)?;

        self.pull_into_vault(caller, assets)?;
        self.commit_issue(&settlement, caller, receiver, assets, shares)?;
        Ok(assets)
    }

    fn commit_issue(
        &mut self,
        settlement: &Settlement,
        caller: &Address,
        receiver: &Address,
        assets: U256,
        shares: U256,
    ) -> Result<(), AdapterError> {
        self.commit_settlement(settlement)?;
        self.ledger.mint(receiver, shares)?;
        self.emit(AdapterEvent::Transfer {
            from: ZERO_ADDRESS,
            to: *receiver,
            amount: shares,
        });
        self.emit(AdapterEvent::Deposit {
            caller: *caller,
            owner: *receiver,
            assets,
            shares,
        });
        self.advance_checkpoint();
        self.metrics.record_deposit();

        info!(
            caller = %fmt_address(caller),
            receiver = %fmt_address(receiver),
            %assets,
            %shares,
            checkpoint = %self.state.previous_total_assets,
            "deposit"
        );
        Ok(())
    }

    fn do_withdraw(
        &mut self,
        caller: &Address,
        assets: U256,
        receiver: &Address,
        owner: &Address,
    ) -> Result<U256, AdapterError> {
        if assets.is_zero() {
            return Err(AdapterError::AmountZero);
        }
        if *receiver == ZERO_ADDRESS {
            return Err(AdapterError::ReceiverZero);
        }

        let settlement = self.stage_settlement()?;
        let max = self.max_withdraw_with(&settlement, owner)?;
        if !invariant_within_clamp(assets, max) {
            return Err(AdapterError::ExceedsMaxWithdraw {
                requested: assets,
                max,
            });
        }
        let shares = assets_to_shares(
            assets,
            settlement.supply,
            settlement.valuation(),
            Rounding::Ceil,
        )?;
        self.ensure_spendable(&settlement, caller, owner, shares)?;

        self.vault
            .withdraw(&self.address, assets, receiver, &self.address)?;
        self.commit_burn(&settlement, caller, receiver, owner, assets, shares)?;
        Ok(shares)
    }

    fn do_redeem(
        &mut self,
        caller: &Address,
        shares: U256,
        receiver: &Address,
        owner: &Address,
    ) -> Result<U256, AdapterError> {
        if shares.is_zero() {
            return Err(AdapterError::AmountZero);
        }
        if *receiver == ZERO_ADDRESS {
            return Err(AdapterError::ReceiverZero);
        }

        let settlement = self.stage_settlement()?;
        let max = self.max_redeem_with(&settlement, owner)?;
        if !invariant_within_clamp(shares, max) {
            return Err(AdapterError::ExceedsMaxRedeem {
                requested: shares,
                max,
            });
        }
        let assets = shares_to_assets(
            shares,
            settlement.supply,
            settlement.valuation(),
            Rounding::Floor,
        )?;
        if assets.is_zero() {
            return Err(AdapterError::ZeroAssets);
        }
        self.ensure_spendable(&settlement, caller, owner, shares)?;

        self.vault
            .withdraw(&self.address, assets, receiver, &self.address)?;
        self.commit_burn(&settlement, caller, receiver, owner, assets, shares)?;
        Ok(assets)
    }

    fn commit_burn(
        &mut self,
        settlement: &Settlement,
        caller: &Address,
        receiver: &Address,
        owner: &Address,
        assets: U256,
        shares: U256,
    ) -> Result<(), AdapterError> {
        self.commit_settlement(settlement)?;
        if caller != owner {
            self.ledger.spend_allowance(owner, caller, shares)?;
        }
        self.ledger.burn(owner, shares)?;
        self.emit(AdapterEvent::Transfer {
            from: *owner,
            to: ZERO_ADDRESS,
            amount: shares,
        });
        self.emit(AdapterEvent::Withdraw {
            caller: *caller,
            receiver: *receiver,
            owner: *owner,
            assets,
            shares,
        });
        self.advance_checkpoint();
        self.metrics.record_withdrawal();

        info!(
            caller = %fmt_address(caller),
            receiver = %fmt_address(receiver),
            owner = %fmt_address(owner),
            %assets,
            %shares,
            checkpoint = %self.state.previous_total_assets,
            "withdraw"
        );
        Ok(())
    }

    fn do_transfer(
        &mut self,
        caller: &Address,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), AdapterError> {
        if *to == ZERO_ADDRESS {
            return Err(AdapterError::ReceiverZero);
        }

        let settlement = self.stage_settlement()?;
        self.ensure_spendable(&settlement, caller, from, amount)?;

        self.settle_in_place(&settlement)?;
        if caller != from {
            self.ledger.spend_allowance(from, caller, amount)?;
        }
        self.ledger.transfer(from, to, amount)?;
        self.emit(AdapterEvent::Transfer {
            from: *from,
            to: *to,
            amount,
        });
        Ok(())
    }

    fn do_set_fee_collector(
        &mut self,
        caller: &Address,
        collector: &Address,
    ) -> Result<(), AdapterError> {
        self.ensure_owner(caller)?;
        if *collector == ZERO_ADDRESS {
            return Err(AdapterError::CollectorZero);
        }

        let settlement = self.stage_settlement()?;
        self.settle_in_place(&settlement)?;

        self.state.fee_collector = *collector;
        self.emit(AdapterEvent::FeeCollectorSet {
            collector: *collector,
        });
        self.metrics.record_admin_change("fee_collector");
        info!(
            previous = %fmt_address(&settlement.collector),
            collector = %fmt_address(collector),
            "fee collector set"
        );
        Ok(())
    }

    fn do_set_fee_pct(&mut self, caller: &Address, pct: U256) -> Result<(), AdapterError> {
        self.ensure_owner(caller)?;
        let fee_pct = check_fee_pct_update(self.state.fee_pct, pct)?;

        let settlement = self.stage_settlement()?;
        self.settle_in_place(&settlement)?;

        let previous = self.state.fee_pct;
        self.state.fee_pct = fee_pct;
        self.emit(AdapterEvent::FeePctSet { pct });
        self.metrics.record_admin_change("fee_pct");
        info!(%previous, fee_pct = %fee_pct, "fee pct set");
        Ok(())
    }

    fn do_transfer_ownership(
        &mut self,
        caller: &Address,
        new_owner: &Address,
    ) -> Result<(), AdapterError> {
        self.ensure_owner(caller)?;
        if *new_owner == ZERO_ADDRESS {
            return Err(AdapterError::OwnerZero);
        }

        let previous = self.state.owner;
        self.state.owner = *new_owner;
        self.emit(AdapterEvent::OwnershipTransferred {
            previous,
            new: *new_owner,
        });
        self.metrics.record_admin_change("owner");
        info!(
            previous = %fmt_address(&previous),
            owner = %fmt_address(new_owner),
            "ownership transferred"
        );
        Ok(())
    }

    fn do_rescue_funds(
        &mut self,
        caller: &Address,
        token: &dyn FungibleToken,
        recipient: &Address,
        amount: U256,
    ) -> Result<(), AdapterError> {
        self.ensure_owner(caller)?;

        let token_address = token.address();
        if token_address == ZERO_ADDRESS {
            return Err(AdapterError::TokenZero);
        }
        if token_address == self.vault.address() {
            return Err(AdapterError::TokenIsUnderlyingVault {
                token: token_address,
            });
        }
        if *recipient == ZERO_ADDRESS {
            return Err(AdapterError::RecipientZero);
        }
        if amount.is_zero() {
            return Err(AdapterError::AmountZero);
        }

        token.transfer(&self.address, recipient, amount)?;
        self.emit(AdapterEvent::FundsRescued {
            token: token_address,
            amount,
            recipient: *recipient,
        });
        self.metrics.record_rescue();
        info!(
            token = %fmt_address(&token_address),
            recipient = %fmt_address(recipient),
            %amount,
            "funds rescued"
        );
        Ok(())
    }
}

impl<V: UnderlyingVault, A: FungibleToken> FeeAdapterApi for FeeAdapter<V, A> {
    fn decimals(&self) -> u8 {
        self.decimals
    }

    fn total_supply(&self) -> Result<U256, AdapterError> {
        Ok(self.stage_settlement()?.supply)
    }

    fn balance_of(&self, holder: &Address) -> Result<U256, AdapterError> {
        let settlement = self.stage_settlement()?;
        Ok(self.settled_balance(&settlement, holder))
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.ledger.allowance(owner, spender)
    }

    fn transfer(&mut self, caller: &Address, to: &Address, amount: U256) -> Result<(), AdapterError> {
        let result = self.do_transfer(caller, caller, to, amount);
        self.observe("transfer", result)
    }

    fn approve(
        &mut self,
        caller: &Address,
        spender: &Address,
        amount: U256,
    ) -> Result<(), AdapterError> {
        let result = self.ledger.approve(caller, spender, amount);
        if result.is_ok() {
            self.emit(AdapterEvent::Approval {
                owner: *caller,
                spender: *spender,
                amount,
            });
        }
        self.observe("approve", result)
    }

    fn transfer_from(
        &mut self,
        caller: &Address,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), AdapterError> {
        let result = self.do_transfer(caller, from, to, amount);
        self.observe("transfer_from", result)
    }

    fn total_assets(&self) -> U256 {
        self.valuation()
    }

    fn previous_total_assets(&self) -> U256 {
        self.state.previous_total_assets
    }

    fn convert_to_shares(&self, assets: U256) -> Result<U256, AdapterError> {
        let settlement = self.stage_settlement()?;
        assets_to_shares(
            assets,
            settlement.supply,
            settlement.valuation(),
            Rounding::Floor,
        )
    }

    fn convert_to_assets(&self, shares: U256) -> Result<U256, AdapterError> {
        let settlement = self.stage_settlement()?;
        shares_to_assets(
            shares,
            settlement.supply,
            settlement.valuation(),
            Rounding::Floor,
        )
    }

    fn preview_deposit(&self, assets: U256) -> Result<U256, AdapterError> {
        self.convert_to_shares(assets)
    }

    fn preview_mint(&self, shares: U256) -> Result<U256, AdapterError> {
        let settlement = self.stage_settlement()?;
        shares_to_assets(
            shares,
            settlement.supply,
            settlement.valuation(),
            Rounding::Ceil,
        )
    }

    fn preview_withdraw(&self, assets: U256) -> Result<U256, AdapterError> {
        let settlement = self.stage_settlement()?;
        assets_to_shares(
            assets,
            settlement.supply,
            settlement.valuation(),
            Rounding::Ceil,
        )
    }

    fn preview_redeem(&self, shares: U256) -> Result<U256, AdapterError> {
        self.convert_to_assets(shares)
    }

    fn max_deposit(&self, _receiver: &Address) -> U256 {
        U256::MAX
    }

    fn max_mint(&self, _receiver: &Address) -> U256 {
        U256::MAX
    }

    fn max_withdraw(&self, owner: &Address) -> Result<U256, AdapterError> {
        let settlement = self.stage_settlement()?;
        self.max_withdraw_with(&settlement, owner)
    }

    fn max_redeem(&self, owner: &Address) -> Result<U256, AdapterError> {
        let settlement = self.stage_settlement()?;
        self.max_redeem_with(&settlement, owner)
    }

    fn deposit(
        &mut self,
        caller: &Address,
        assets: U256,
        receiver: &Address,
    ) -> Result<U256, AdapterError> {
        let result = self.do_deposit(caller, assets, receiver);
        self.observe("deposit", result)
    }

    fn mint(
        &mut self,
        caller: &Address,
        shares: U256,
        receiver: &Address,
    ) -> Result<U256, AdapterError> {
        let result = self.do_mint(caller, shares, receiver);
        self.observe("mint", result)
    }

    fn withdraw(
        &mut self,
        caller: &Address,
        assets: U256,
        receiver: &Address,
        owner: &Address,
    ) -> Result<U256, AdapterError> {
        let result = self.do_withdraw(caller, assets, receiver, owner);
        self.observe("withdraw", result)
    }

    fn redeem(
        &mut self,
        caller: &Address,
        shares: U256,
        receiver: &Address,
        owner: &Address,
    ) -> Result<U256, AdapterError> {
        let result = self.do_redeem(caller, shares, receiver, owner);
        self.observe("redeem", result)
    }

    fn fee_pct(&self) -> U256 {
        self.state.fee_pct.value()
    }

    fn fee_collector(&self) -> Address {
        self.state.fee_collector
    }

    fn owner(&self) -> Address {
        self.state.owner
    }

    fn authorized(&self, caller: &Address) -> bool {
        *caller == self.state.owner
    }

    fn set_fee_collector(
        &mut self,
        caller: &Address,
        collector: &Address,
    ) -> Result<(), AdapterError> {
        let result = self.do_set_fee_collector(caller, collector);
        self.observe("set_fee_collector", result)
    }

    fn set_fee_pct(&mut self, caller: &Address, pct: U256) -> Result<(), AdapterError> {
        let result = self.do_set_fee_pct(caller, pct);
        self.observe("set_fee_pct", result)
    }

    fn transfer_ownership(
        &mut self,
        caller: &Address,
        new_owner: &Address,
    ) -> Result<(), AdapterError> {
        let result = self.do_transfer_ownership(caller, new_owner);
        self.observe("transfer_ownership", result)
    }

    fn rescue_funds(
        &mut self,
        caller: &Address,
        token: &dyn FungibleToken,
        recipient: &Address,
        amount: U256,
    ) -> Result<(), AdapterError> {
        let result = self.do_rescue_funds(caller, token, recipient, amount);
        self.observe("rescue_funds", result)
    }
}
