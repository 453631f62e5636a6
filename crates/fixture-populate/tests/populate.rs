//! Driver tests against in-memory loaders.

use async_trait::async_trait;
use fixture_core::{DefectKind, FixtureProfile, FixtureRow, FixtureTable, RowCounts, TableDefinition};
use fixture_generator::{parse_reference_date, FixtureGenerator};
use fixture_populate::{
    populate_fixture, populate_table, DryRunLoader, FixtureLoader, PopulateError, PopulateOptions,
};

fn small_profile() -> FixtureProfile {
    FixtureProfile {
        batch_size: 40,
        row_counts: RowCounts {
            suppliers: 50,
            customers: 250,
            products: 100,
        },
        ..Default::default()
    }
}

fn generator(profile: FixtureProfile) -> FixtureGenerator {
    let reference = parse_reference_date("2024-06-01").unwrap();
    FixtureGenerator::new(profile, 42, reference).unwrap()
}

fn options(batch_size: usize) -> PopulateOptions {
    PopulateOptions {
        tables: FixtureTable::ALL.to_vec(),
        batch_size,
        verify_counts: true,
    }
}

#[tokio::test]
async fn dry_run_loads_every_table_in_batches() {
    let generator = generator(small_profile());
    let mut loader = DryRunLoader::new();

    let report = populate_fixture(&mut loader, &generator, &options(40))
        .await
        .unwrap();

    assert_eq!(loader.rows_for(FixtureTable::Categories), 8);
    assert_eq!(loader.rows_for(FixtureTable::Suppliers), 50);
    assert_eq!(loader.rows_for(FixtureTable::Customers), 250);
    assert_eq!(loader.rows_for(FixtureTable::Products), 100);

    assert_eq!(loader.batch_sizes(FixtureTable::Categories), vec![8]);
    assert_eq!(loader.batch_sizes(FixtureTable::Suppliers), vec![40, 10]);
    assert_eq!(
        loader.batch_sizes(FixtureTable::Customers),
        vec![40, 40, 40, 40, 40, 40, 10]
    );
    assert_eq!(loader.batch_sizes(FixtureTable::Products), vec![40, 40, 20]);

    assert_eq!(report.backend, "dry-run");
    assert_eq!(report.seed, 42);
    assert_eq!(report.total_rows(), 408);
    assert_eq!(report.tables.len(), 4);
    assert_eq!(report.table(FixtureTable::Customers).unwrap().batch_count, 7);
}

#[tokio::test]
async fn report_tally_matches_generator() {
    let profile = small_profile();
    let generator = generator(profile.clone());
    let mut loader = DryRunLoader::new();

    let report = populate_fixture(&mut loader, &generator, &options(40))
        .await
        .unwrap();

    let mut customers = generator.table(FixtureTable::Customers);
    customers.by_ref().for_each(drop);
    let mut products = generator.table(FixtureTable::Products);
    products.by_ref().for_each(drop);

    let defects = report.defects();
    for kind in DefectKind::ALL {
        let expected = match kind.table() {
            FixtureTable::Customers => customers.tally().count(kind),
            _ => products.tally().count(kind),
        };
        assert_eq!(defects.count(kind), expected, "{kind:?}");
    }
}

#[tokio::test]
async fn table_selection_loads_only_selected_tables() {
    let generator = generator(small_profile());
    let mut loader = DryRunLoader::new();
    let options = PopulateOptions {
        tables: vec![FixtureTable::Categories, FixtureTable::Products],
        batch_size: 1_000,
        verify_counts: true,
    };

    let report = populate_fixture(&mut loader, &generator, &options)
        .await
        .unwrap();

    assert_eq!(report.total_rows(), 108);
    assert_eq!(loader.rows_for(FixtureTable::Customers), 0);
    assert!(report.table(FixtureTable::Suppliers).is_none());
    assert_eq!(loader.batch_sizes(FixtureTable::Products), vec![100]);
}

#[tokio::test]
async fn zero_batch_size_is_rejected() {
    let generator = generator(small_profile());

    let mut loader = DryRunLoader::new();
    let err = populate_table(&mut loader, &generator, FixtureTable::Categories, 0)
        .await
        .unwrap_err();
    assert!(matches!(err, PopulateError::ZeroBatchSize));
    assert!(loader.batch_sizes(FixtureTable::Categories).is_empty());

    let err = populate_fixture(&mut loader, &generator, &options(0))
        .await
        .unwrap_err();
    assert!(matches!(err, PopulateError::ZeroBatchSize));
    assert_eq!(loader.rows_for(FixtureTable::Suppliers), 0);
}

#[derive(Debug, thiserror::Error)]
#[error("connection reset")]
struct ConnectionReset;

/// Fails on the n-th batch of one table, keeping what was committed before.
struct FlakyLoader {
    inner: DryRunLoader,
    fail_table: &'static str,
    fail_on_batch: usize,
    batches_seen: usize,
}

#[async_trait]
impl FixtureLoader for FlakyLoader {
    type Error = ConnectionReset;

    fn backend(&self) -> &'static str {
        "flaky"
    }

    async fn recreate_table(&mut self, table: &TableDefinition) -> Result<(), Self::Error> {
        self.inner.recreate_table(table).await.map_err(|e| match e {})
    }

    async fn insert_batch(
        &mut self,
        table: &TableDefinition,
        rows: &[FixtureRow],
    ) -> Result<u64, Self::Error> {
        if table.name == self.fail_table {
            self.batches_seen += 1;
            if self.batches_seen == self.fail_on_batch {
                return Err(ConnectionReset);
            }
        }
        self.inner.insert_batch(table, rows).await.map_err(|e| match e {})
    }

    async fn row_count(&mut self, table: &TableDefinition) -> Result<u64, Self::Error> {
        self.inner.row_count(table).await.map_err(|e| match e {})
    }
}

#[tokio::test]
async fn failed_batch_keeps_earlier_commits() {
    let generator = generator(small_profile());
    let mut loader = FlakyLoader {
        inner: DryRunLoader::new(),
        fail_table: "Customers",
        fail_on_batch: 3,
        batches_seen: 0,
    };

    let err = populate_fixture(&mut loader, &generator, &options(40))
        .await
        .unwrap_err();

    match err {
        PopulateError::Loader {
            backend,
            table,
            rows_committed,
            ..
        } => {
            assert_eq!(backend, "flaky");
            assert_eq!(table, FixtureTable::Customers);
            assert_eq!(rows_committed, 80);
        }
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(loader.inner.rows_for(FixtureTable::Suppliers), 50);
    assert_eq!(loader.inner.rows_for(FixtureTable::Customers), 80);
    assert_eq!(loader.inner.rows_for(FixtureTable::Products), 0);
}

/// Reports one row fewer than was inserted.
struct LossyLoader(DryRunLoader);

#[async_trait]
impl FixtureLoader for LossyLoader {
    type Error = ConnectionReset;

    fn backend(&self) -> &'static str {
        "lossy"
    }

    async fn recreate_table(&mut self, table: &TableDefinition) -> Result<(), Self::Error> {
        self.0.recreate_table(table).await.map_err(|e| match e {})
    }

    async fn insert_batch(
        &mut self,
        table: &TableDefinition,
        rows: &[FixtureRow],
    ) -> Result<u64, Self::Error> {
        self.0.insert_batch(table, rows).await.map_err(|e| match e {})
    }

    async fn row_count(&mut self, table: &TableDefinition) -> Result<u64, Self::Error> {
        let count = self.0.row_count(table).await.map_err(|e| match e {})?;
        Ok(count.saturating_sub(1))
    }
}

#[tokio::test]
async fn row_count_mismatch_is_reported() {
    let generator = generator(small_profile());
    let mut loader = LossyLoader(DryRunLoader::new());

    let err = populate_fixture(&mut loader, &generator, &options(40))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PopulateError::RowCountMismatch {
            table: FixtureTable::Categories,
            expected: 8,
            actual: 7,
        }
    ));

    let mut loader = LossyLoader(DryRunLoader::new());
    let unverified = PopulateOptions {
        verify_counts: false,
        ..options(40)
    };
    let report = populate_fixture(&mut loader, &generator, &unverified)
        .await
        .unwrap();
    assert_eq!(report.total_rows(), 408);
}
