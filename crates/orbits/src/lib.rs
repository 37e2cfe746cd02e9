//! Headless host for the gravitating balls
//!
//! Everything a front end needs around [`nbody::System`]: run configuration,
//! random and preset starting systems, a fixed-tick frame loop that logs the
//! conserved totals, and an append-only JSON-lines file of past runs that can
//! be replayed by id.

pub mod config;
pub mod generation;
pub mod logging;
pub mod runner;
pub mod saves;
pub mod scenarios;

#[cfg(test)]
mod generation_test;
#[cfg(test)]
mod runner_test;
#[cfg(test)]
mod scenarios_test;

pub use config::{Arena, RunConfig};
pub use generation::create_system;
pub use runner::{RunSummary, run};
pub use saves::{RunRecord, SaveError, append_record, load_record};
