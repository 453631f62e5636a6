//! MySQL loader for the uat-fixture data generator.
//!
//! Maps fixture column types to MySQL DDL and loads rows with multi-row
//! prepared `INSERT` statements, one transaction per batch.

pub mod args;
pub mod ddl;
pub mod error;
pub mod insert;
pub mod loader;

pub use args::MySQLPopulateArgs;
pub use ddl::MySQLDdl;
pub use error::MySQLLoaderError;
pub use loader::MySQLLoader;
