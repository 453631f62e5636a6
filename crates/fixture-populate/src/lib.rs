//! Common types and utilities for uat-fixture populators.
//!
//! This crate provides what every backend shares:
//!
//! - [`CommonPopulateArgs`] - CLI flags for seed, profile, batch size, tables
//! - [`FixtureLoader`] - the seam a database backend implements
//! - [`populate_fixture`] - the sequential generate/insert/commit driver
//! - [`DryRunLoader`] - a loader that only counts rows
//! - [`FixtureReport`] - row counts and injected defects of a run

pub mod args;
pub mod dry_run;
pub mod loader;
pub mod logging;
pub mod populate;
pub mod report;

pub use args::{CommonPopulateArgs, ConfigError};
pub use dry_run::DryRunLoader;
pub use loader::FixtureLoader;
pub use logging::mask_connection_password;
pub use populate::{populate_fixture, populate_table, PopulateError, PopulateOptions, TableMetrics};
pub use report::FixtureReport;
