//! # Algorithms Module
//!
//! Fixed-point math, share pricing and fee settlement.

pub mod conversion;
pub mod fee_settlement;
pub mod math;

pub use conversion::{assets_to_shares, share_price, shares_to_assets};
pub use fee_settlement::compute_fee_accrual;
pub use math::mul_div;
