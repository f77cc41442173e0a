//! # Adapters Module
//!
//! In-memory implementations of the outbound ports.

pub mod token;
pub mod vault;

pub use token::InMemoryToken;
pub use vault::InMemoryVault;
