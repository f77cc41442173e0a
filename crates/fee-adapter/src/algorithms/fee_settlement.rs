//! # High-Water-Mark Fee Settlement
//!
//! Prices the performance fee on yield accrued since the last checkpoint.
//!
//! ## Algorithm
//!
//! 1. `gain = valuation - checkpoint`, saturating at zero. Losses are never
//!    clawed back.
//! 2. `fee_assets = gain * fee_pct / ONE` (floor).
//! 3. `fee_shares = fee_assets * supply / (valuation - fee_assets)` (floor), so
//!    that after minting, the collector's shares are worth `fee_assets` at the
//!    diluted price. With `valuation == fee_assets` the divisor falls back to
//!    `valuation`.
//! 4. No shares are minted when nothing is outstanding.

use super::math::mul_div;
use crate::domain::{AdapterError, FeeAccrual, FeePct, Rounding, ONE};
use primitive_types::U256;

/// Compute the fee owed at `valuation` against `checkpoint`.
pub fn compute_fee_accrual(
    valuation: U256,
    checkpoint: U256,
    fee_pct: FeePct,
    supply: U256,
) -> Result<FeeAccrual, AdapterError> {
    let gain = valuation.saturating_sub(checkpoint);
    if gain.is_zero() || fee_pct.is_zero() {
        return Ok(FeeAccrual {
            gain,
            ..FeeAccrual::none(valuation)
        });
    }

    let fee_assets = mul_div(gain, fee_pct.value(), ONE, Rounding::Floor)?;
    if fee_assets.is_zero() || supply.is_zero() {
        return Ok(FeeAccrual {
            gain,
            fee_assets,
            ..FeeAccrual::none(valuation)
        });
    }

    // fee_assets <= gain <= valuation
    let divisor = match valuation - fee_assets {
        d if d.is_zero() => valuation,
        d => d,
    };
    let fee_shares = mul_div(fee_assets, supply, divisor, Rounding::Floor)?;

    Ok(FeeAccrual {
        valuation,
        gain,
        fee_assets,
        fee_shares,
    })
}
