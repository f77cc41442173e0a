//! # Domain Value Objects
//!
//! Fixed-point constants, rounding direction and the fee rate.

use super::errors::AdapterError;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 100% in 18-decimal fixed point (`10^18`).
pub const ONE: U256 = U256([1_000_000_000_000_000_000, 0, 0, 0]);

/// Decimal precision of [`ONE`].
pub const ONE_DECIMALS: u8 = 18;

/// Largest exponent for which `10^decimals` fits in 256 bits.
pub const MAX_DECIMALS: u8 = 77;

/// Rounding direction for fixed-point division.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rounding {
    /// Toward zero.
    Floor,
    /// Away from zero when a remainder exists.
    Ceil,
}

/// Performance fee as a fraction of [`ONE`].
///
/// Always within `[0, ONE]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FeePct(U256);

impl FeePct {
    /// Create a fee rate, rejecting anything above 100%.
    pub fn new(pct: U256) -> Result<Self, AdapterError> {
        if pct > ONE {
            return Err(AdapterError::FeePctAboveOne { pct });
        }
        Ok(Self(pct))
    }

    /// Parse a decimal fraction such as `"0.1"`.
    pub fn from_decimal(value: &str) -> Result<Self, AdapterError> {
        Self::new(parse_units(value, ONE_DECIMALS)?)
    }

    /// Raw fixed-point value.
    pub fn value(&self) -> U256 {
        self.0
    }

    /// Whether no fee is charged.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for FeePct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_units(self.0, ONE_DECIMALS))
    }
}

/// Parse a decimal string into a fixed-point integer with `decimals` places.
///
/// `"1.5"` with 18 decimals becomes `1_500_000_000_000_000_000`.
pub fn parse_units(value: &str, decimals: u8) -> Result<U256, AdapterError> {
    let value = value.trim();
    if decimals > MAX_DECIMALS {
        return Err(AdapterError::InvalidAmount(format!(
            "{decimals} decimals exceeds {MAX_DECIMALS}"
        )));
    }

    let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(AdapterError::InvalidAmount(value.to_string()));
    }
    if fraction.len() > decimals as usize {
        return Err(AdapterError::InvalidAmount(format!(
            "{value} has more than {decimals} decimals"
        )));
    }

    let parse = |digits: &str| {
        if digits.is_empty() {
            Ok(U256::zero())
        } else {
            U256::from_dec_str(digits).map_err(|_| AdapterError::Overflow)
        }
    };

    let scale = U256::exp10(decimals as usize);
    let whole = parse(whole)?;
    let fraction = parse(&format!("{:0<width$}", fraction, width = decimals as usize))?;

    whole
        .checked_mul(scale)
        .and_then(|w| w.checked_add(fraction))
        .ok_or(AdapterError::Overflow)
}

/// Render a fixed-point integer as a decimal string, trimming trailing zeros.
pub fn format_units(value: U256, decimals: u8) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let scale = U256::exp10(decimals as usize);
    let whole = value / scale;
    let fraction = value % scale;

    if fraction.is_zero() {
        return whole.to_string();
    }

    let padded = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    format!("{}.{}", whole, padded.trim_end_matches('0'))
}
