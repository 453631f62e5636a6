//! Sequential populate driver.
//!
//! For each table: drop and create, then generate and insert one batch at a
//! time. Each batch is committed by the loader before the next is generated.

use crate::loader::FixtureLoader;
use crate::report::FixtureReport;
use fixture_core::{DefectTally, FixtureTable};
use fixture_generator::FixtureGenerator;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Log an info line every this many batches.
const PROGRESS_EVERY_BATCHES: u64 = 10;

/// Errors that can occur while populating.
#[derive(Debug, thiserror::Error)]
pub enum PopulateError<E> {
    /// The backend failed. Batches committed before the failure stay.
    #[error("{backend} failed on table '{table}' after {rows_committed} committed rows: {source}")]
    Loader {
        backend: &'static str,
        table: FixtureTable,
        rows_committed: u64,
        #[source]
        source: E,
    },

    /// The table holds a different number of rows than were inserted.
    #[error("Table '{table}' has {actual} rows after load, expected {expected}")]
    RowCountMismatch {
        table: FixtureTable,
        expected: u64,
        actual: u64,
    },

    /// A batch must hold at least one row.
    #[error("Batch size must be greater than zero")]
    ZeroBatchSize,
}

/// Options for a populate run.
#[derive(Debug, Clone)]
pub struct PopulateOptions {
    /// Tables to load, in load order
    pub tables: Vec<FixtureTable>,
    /// Rows per batch
    pub batch_size: usize,
    /// Compare `SELECT COUNT(*)` with rows inserted after each table
    pub verify_counts: bool,
}

/// Metrics from populating one table.
#[derive(Debug, Clone)]
pub struct TableMetrics {
    /// Table populated
    pub table: FixtureTable,
    /// Number of rows inserted
    pub rows_inserted: u64,
    /// Number of batches committed
    pub batch_count: u64,
    /// Total time taken
    pub total_duration: Duration,
    /// Time spent generating data
    pub generation_duration: Duration,
    /// Time spent inserting data
    pub insert_duration: Duration,
    /// Defects injected into this table
    pub defects: DefectTally,
}

impl TableMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Drop, create and fill a single table.
pub async fn populate_table<L: FixtureLoader>(
    loader: &mut L,
    generator: &FixtureGenerator,
    table: FixtureTable,
    batch_size: usize,
) -> Result<TableMetrics, PopulateError<L::Error>> {
    if batch_size == 0 {
        return Err(PopulateError::ZeroBatchSize);
    }

    let start_time = Instant::now();
    let definition = table.definition();
    let mut rows = generator.table(table);
    let backend = loader.backend();

    info!(
        "Populating {} '{}' with {} rows (batch size: {})",
        backend,
        table,
        rows.total(),
        batch_size
    );

    loader
        .recreate_table(&definition)
        .await
        .map_err(|source| PopulateError::Loader {
            backend,
            table,
            rows_committed: 0,
            source,
        })?;

    let mut rows_inserted = 0u64;
    let mut batch_count = 0u64;
    let mut generation_duration = Duration::ZERO;
    let mut insert_duration = Duration::ZERO;

    while rows.remaining() > 0 {
        let gen_start = Instant::now();
        let batch = rows.next_batch(batch_size);
        generation_duration += gen_start.elapsed();

        let insert_start = Instant::now();
        let inserted = loader
            .insert_batch(&definition, &batch)
            .await
            .map_err(|source| PopulateError::Loader {
                backend,
                table,
                rows_committed: rows_inserted,
                source,
            })?;
        insert_duration += insert_start.elapsed();

        rows_inserted += inserted;
        batch_count += 1;

        debug!(
            "Batch {} of '{}' committed: {} rows, {} remaining",
            batch_count,
            table,
            inserted,
            rows.remaining()
        );
        if batch_count % PROGRESS_EVERY_BATCHES == 0 {
            info!("  Inserted {} {}...", rows_inserted, table.name().to_lowercase());
        }
    }

    let metrics = TableMetrics {
        table,
        rows_inserted,
        batch_count,
        total_duration: start_time.elapsed(),
        generation_duration,
        insert_duration,
        defects: rows.tally().clone(),
    };

    info!(
        "Populated '{}': {} rows in {:?} ({:.2} rows/sec)",
        table,
        metrics.rows_inserted,
        metrics.total_duration,
        metrics.rows_per_second()
    );

    Ok(metrics)
}

/// Populate the selected tables in order and collect a report.
///
/// The first failure aborts the run; tables and batches loaded before it
/// stay committed.
pub async fn populate_fixture<L: FixtureLoader>(
    loader: &mut L,
    generator: &FixtureGenerator,
    options: &PopulateOptions,
) -> Result<FixtureReport, PopulateError<L::Error>> {
    if options.batch_size == 0 {
        return Err(PopulateError::ZeroBatchSize);
    }

    let mut report = FixtureReport::new(
        loader.backend(),
        generator.seed(),
        generator.reference(),
        generator.profile().clone(),
    );

    for &table in &options.tables {
        let metrics = populate_table(loader, generator, table, options.batch_size).await?;

        if options.verify_counts {
            let backend = loader.backend();
            let definition = table.definition();
            let actual = loader
                .row_count(&definition)
                .await
                .map_err(|source| PopulateError::Loader {
                    backend,
                    table,
                    rows_committed: metrics.rows_inserted,
                    source,
                })?;
            if actual != metrics.rows_inserted {
                return Err(PopulateError::RowCountMismatch {
                    table,
                    expected: metrics.rows_inserted,
                    actual,
                });
            }
            debug!("Verified '{}': {} rows", table, actual);
        }

        report.push(metrics);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics() {
        let metrics = TableMetrics {
            table: FixtureTable::Customers,
            rows_inserted: 1000,
            batch_count: 10,
            total_duration: Duration::from_secs(10),
            generation_duration: Duration::from_secs(2),
            insert_duration: Duration::from_secs(8),
            defects: DefectTally::new(),
        };

        assert_eq!(metrics.rows_per_second(), 100.0);
    }

    #[test]
    fn test_metrics_zero_duration() {
        let metrics = TableMetrics {
            table: FixtureTable::Categories,
            rows_inserted: 8,
            batch_count: 1,
            total_duration: Duration::ZERO,
            generation_duration: Duration::ZERO,
            insert_duration: Duration::ZERO,
            defects: DefectTally::new(),
        };

        assert_eq!(metrics.rows_per_second(), 0.0);
    }
}
