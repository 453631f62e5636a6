//! Loader that generates everything but talks to no database.

use crate::loader::FixtureLoader;
use async_trait::async_trait;
use fixture_core::{FixtureRow, FixtureTable, TableDefinition};
use std::collections::BTreeMap;
use std::convert::Infallible;
use tracing::info;

/// Counts rows and batches per table instead of inserting them.
#[derive(Debug, Default)]
pub struct DryRunLoader {
    rows: BTreeMap<String, u64>,
    batches: Vec<(String, usize)>,
}

impl DryRunLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows "inserted" into a table.
    pub fn rows_for(&self, table: FixtureTable) -> u64 {
        self.rows.get(table.name()).copied().unwrap_or(0)
    }

    /// Batch sizes in the order they arrived, per table.
    pub fn batch_sizes(&self, table: FixtureTable) -> Vec<usize> {
        self.batches
            .iter()
            .filter(|(name, _)| name == table.name())
            .map(|(_, size)| *size)
            .collect()
    }
}

#[async_trait]
impl FixtureLoader for DryRunLoader {
    type Error = Infallible;

    fn backend(&self) -> &'static str {
        "dry-run"
    }

    async fn recreate_table(&mut self, table: &TableDefinition) -> Result<(), Self::Error> {
        info!("[DRY-RUN] Would drop and create table: {}", table.name);
        self.rows.insert(table.name.clone(), 0);
        Ok(())
    }

    async fn insert_batch(
        &mut self,
        table: &TableDefinition,
        rows: &[FixtureRow],
    ) -> Result<u64, Self::Error> {
        *self.rows.entry(table.name.clone()).or_insert(0) += rows.len() as u64;
        self.batches.push((table.name.clone(), rows.len()));
        Ok(rows.len() as u64)
    }

    async fn row_count(&mut self, table: &TableDefinition) -> Result<u64, Self::Error> {
        Ok(self.rows.get(&table.name).copied().unwrap_or(0))
    }
}
