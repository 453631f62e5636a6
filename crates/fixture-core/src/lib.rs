//! Core types for the uat-fixture data generator.
//!
//! This crate provides the foundational types shared by the generator and
//! every loader backend:
//!
//! - [`ColumnType`] - Column types of the fixture tables
//! - [`FixtureValue`] - Generated values, including intentionally invalid ones
//! - [`FixtureRow`] - A generated row, ordered like its table's columns
//! - [`FixtureTable`] / [`TableDefinition`] - The four fixture tables
//! - [`FixtureProfile`] - Row counts, batch size and defect rates (YAML)
//! - [`DefectKind`] / [`DefectTally`] - The catalogue of injected defects
//!
//! # Architecture
//!
//! ```text
//! fixture-core (this crate)
//!    │
//!    ├─── fixture-generator             (produces FixtureRow values)
//!    │
//!    ├─── fixture-populate              (FixtureLoader trait, batch driver)
//!    ├─── fixture-populate-postgresql   (DDL + batched INSERT for PostgreSQL)
//!    └─── fixture-populate-mysql        (DDL + batched INSERT for MySQL)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{DefectKind, FixtureProfile, FixtureTable};
//!
//! let profile = FixtureProfile::default();
//! assert_eq!(profile.row_count(FixtureTable::Customers), 900_000);
//! assert_eq!(profile.defects.rate(DefectKind::OrphanedSupplierId), 0.16);
//! ```

pub mod defects;
pub mod profile;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use defects::{DefectKind, DefectTally};
pub use profile::{DefectRates, FixtureProfile, ProfileError, RowCounts};
pub use schema::{ColumnDefinition, FixtureTable, SchemaError, TableDefinition};
pub use types::{ColumnType, ToDdl};
pub use values::{FixtureRow, FixtureValue};
