//! End-to-end adapter flows over in-memory asset and vault ledgers.

pub mod support;

mod atomicity;
mod fee_flows;
mod liquidity;
mod properties;
