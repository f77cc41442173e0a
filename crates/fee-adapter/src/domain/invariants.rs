//! Accounting invariants for the fee adapter.

use super::errors::AdapterError;
use super::ledger::ShareLedger;
use super::value_objects::{FeePct, ONE};
use primitive_types::U256;

/// INVARIANT-1: Supply Conservation
/// Total supply equals the sum of all balances.
pub fn invariant_supply_conservation(ledger: &ShareLedger) -> bool {
    ledger
        .sum_of_balances()
        .map(|sum| sum == ledger.total_supply())
        .unwrap_or(false)
}

/// INVARIANT-2: Fee Bound
/// The fee rate never exceeds 100%.
pub fn invariant_fee_pct_bounds(pct: U256) -> bool {
    pct <= ONE
}

/// INVARIANT-3: Fee Ratchet
/// After construction the fee rate can only be lowered, and never to zero.
pub fn invariant_fee_pct_ratchet(current: FeePct, proposed: U256) -> bool {
    !proposed.is_zero() && proposed <= current.value()
}

/// INVARIANT-4: Liquidity Clamp
/// A withdrawal never exceeds what the clamp allows.
pub fn invariant_within_clamp(requested: U256, max: U256) -> bool {
    requested <= max
}

/// Check a proposed fee-rate change, reporting the first violated rule.
pub fn check_fee_pct_update(current: FeePct, proposed: U256) -> Result<FeePct, AdapterError> {
    if proposed.is_zero() {
        return Err(AdapterError::FeePctZero);
    }
    if !invariant_fee_pct_ratchet(current, proposed) {
        return Err(AdapterError::FeePctAbovePrevious {
            pct: proposed,
            previous: current.value(),
        });
    }
    FeePct::new(proposed)
}

/// Check ledger conservation, reporting both sides on mismatch.
pub fn check_supply_conservation(ledger: &ShareLedger) -> Result<(), AdapterError> {
    let balances = ledger.sum_of_balances()?;
    if balances != ledger.total_supply() {
        return Err(AdapterError::SupplyMismatch {
            supply: ledger.total_supply(),
            balances,
        });
    }
    Ok(())
}
