//! # Share/Asset Conversion
//!
//! Exchange rate between adapter shares and underlying assets.
//!
//! With no shares outstanding every conversion is at parity. Otherwise the
//! rate is `total_assets / supply`, and the caller picks the rounding
//! direction so that it always favors the pool:
//!
//! | Operation        | Conversion         | Rounding |
//! |------------------|--------------------|----------|
//! | deposit          | assets -> shares   | Floor    |
//! | mint             | shares -> assets   | Ceil     |
//! | withdraw         | assets -> shares   | Ceil     |
//! | redeem           | shares -> assets   | Floor    |

use super::math::mul_div;
use crate::domain::{AdapterError, Rounding, ONE};
use primitive_types::U256;

/// Shares worth `assets` at the given supply and valuation.
///
/// Fails with `ZeroValuation` if shares are outstanding but back nothing.
pub fn assets_to_shares(
    assets: U256,
    supply: U256,
    total_assets: U256,
    rounding: Rounding,
) -> Result<U256, AdapterError> {
    if assets.is_zero() {
        return Ok(U256::zero());
    }
    if supply.is_zero() {
        return Ok(assets);
    }
    if total_assets.is_zero() {
        return Err(AdapterError::ZeroValuation { supply });
    }
    mul_div(assets, supply, total_assets, rounding)
}

/// Assets backing `shares` at the given supply and valuation.
pub fn shares_to_assets(
    shares: U256,
    supply: U256,
    total_assets: U256,
    rounding: Rounding,
) -> Result<U256, AdapterError> {
    if supply.is_zero() {
        return Ok(shares);
    }
    mul_div(shares, total_assets, supply, rounding)
}

/// Assets per share, scaled by `ONE`. Parity when nothing is outstanding.
pub fn share_price(supply: U256, total_assets: U256) -> Result<U256, AdapterError> {
    if supply.is_zero() {
        return Ok(ONE);
    }
    mul_div(total_assets, ONE, supply, Rounding::Floor)
}
