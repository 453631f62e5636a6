//! Row generator for the uat-fixture data set.
//!
//! This crate provides the `FixtureGenerator` which produces the four fixture
//! tables with a known rate of injected data-quality defects. Every table
//! draws from its own pair of seeded RNGs, so the same seed and reference
//! date always yield the same rows regardless of which tables are loaded.
//!
//! # Architecture
//!
//! ```text
//! FixtureProfile + seed + reference date
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ FixtureGenerator │
//! └────────┬─────────┘
//!          │ table(FixtureTable)
//!          ▼
//! ┌──────────────────┐
//! │  TableGenerator  │   decisions: StdRng  (defect rolls, choices, numbers)
//! │                  │   faker:     StdRng  (names, companies, dates)
//! │                  │   tally:     DefectTally
//! └────────┬─────────┘
//!          ▼
//!    FixtureRow { table, id, values }
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{FixtureProfile, FixtureTable};
//! use fixture_generator::{parse_reference_date, FixtureGenerator};
//!
//! let reference = parse_reference_date("2024-06-01").unwrap();
//! let generator = FixtureGenerator::new(FixtureProfile::default(), 42, reference).unwrap();
//!
//! let mut categories = generator.table(FixtureTable::Categories);
//! let batch = categories.next_batch(10);
//! assert_eq!(batch.len(), 8);
//! ```

pub mod customers;
pub mod generator;
pub mod generators;
pub mod products;
pub mod reference;
pub mod suppliers;

// Re-exports for convenience
pub use generator::{FixtureGenerator, GeneratorError, TableGenerator};
pub use generators::timestamp::parse_reference_date;
