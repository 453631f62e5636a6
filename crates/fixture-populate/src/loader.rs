//! The loader seam implemented by each database backend.

use async_trait::async_trait;
use fixture_core::{FixtureRow, TableDefinition};

/// A destination for fixture rows.
///
/// Calls arrive strictly in sequence on one session: `recreate_table`, then
/// `insert_batch` once per batch, then optionally `row_count`. Every
/// `insert_batch` call must be committed before it returns; a failed batch
/// must not roll back batches that already returned.
#[async_trait]
pub trait FixtureLoader: Send {
    /// Backend error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short backend name for logs and reports.
    fn backend(&self) -> &'static str;

    /// Drop the table if it exists and create it empty.
    async fn recreate_table(&mut self, table: &TableDefinition) -> Result<(), Self::Error>;

    /// Insert and commit one batch. Returns the number of rows inserted.
    async fn insert_batch(
        &mut self,
        table: &TableDefinition,
        rows: &[FixtureRow],
    ) -> Result<u64, Self::Error>;

    /// Number of rows currently in the table.
    async fn row_count(&mut self, table: &TableDefinition) -> Result<u64, Self::Error>;
}
