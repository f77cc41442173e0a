//! # Adapter Sim
//!
//! Replays JSON scenarios (deposits, yield, drains, admin changes) against a
//! fee adapter wired to in-memory asset and vault ledgers, printing the
//! adapter state after every step.

pub mod runner;
pub mod scenario;

pub use runner::{account_address, render_text, ScenarioReport, Simulation, Status, StepReport};
pub use scenario::{Scenario, ScenarioStep, Step};
