//! 256-bit fixed-point helpers.

use crate::domain::{AdapterError, Rounding};
use primitive_types::{U256, U512};

/// `x * y / denominator` with a 512-bit intermediate product.
///
/// Fails with `DivisionByZero` when `denominator` is zero and with `Overflow`
/// when the quotient does not fit in 256 bits.
pub fn mul_div(
    x: U256,
    y: U256,
    denominator: U256,
    rounding: Rounding,
) -> Result<U256, AdapterError> {
    if denominator.is_zero() {
        return Err(AdapterError::DivisionByZero);
    }

    let (quotient, remainder) = x.full_mul(y).div_mod(U512::from(denominator));
    let quotient = match rounding {
        Rounding::Ceil if !remainder.is_zero() => quotient + U512::one(),
        _ => quotient,
    };

    U256::try_from(quotient).map_err(|_| AdapterError::Overflow)
}
