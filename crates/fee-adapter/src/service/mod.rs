//! # Service Layer
//!
//! The fee adapter itself and its snapshot support.

mod adapter_service;
mod snapshot;


pub use adapter_service::FeeAdapter;
pub use snapshot::AdapterSnapshot;
