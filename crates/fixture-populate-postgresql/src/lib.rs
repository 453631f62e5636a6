//! PostgreSQL loader for the uat-fixture data generator.
//!
//! Maps fixture column types to PostgreSQL DDL and loads rows with
//! multi-row `INSERT ... VALUES` statements, one transaction per batch.
//!
//! # Example
//!
//! ```ignore
//! use fixture_populate::{populate_fixture, PopulateOptions};
//! use fixture_populate_postgresql::PostgreSQLLoader;
//!
//! let mut loader = PostgreSQLLoader::connect(&args.connection_string()).await?;
//! let report = populate_fixture(&mut loader, &generator, &options).await?;
//! ```

pub mod args;
pub mod ddl;
pub mod error;
pub mod insert;
pub mod loader;

pub use args::PostgreSQLPopulateArgs;
pub use ddl::PostgreSQLDdl;
pub use error::PostgreSQLLoaderError;
pub use loader::PostgreSQLLoader;
