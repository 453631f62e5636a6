//! Statistical checks of the generated fixture.
//!
//! Defect counts observed in the rows must agree with the generator's tally
//! and converge on the configured rates.

use fixture_core::{DefectKind, DefectTally, FixtureProfile, FixtureRow, FixtureTable};
use fixture_generator::generators::person::is_well_formed_email;
use fixture_generator::{parse_reference_date, FixtureGenerator};
use rust_decimal::Decimal;

fn generator(profile: FixtureProfile) -> FixtureGenerator {
    let reference = parse_reference_date("2024-06-01").unwrap();
    FixtureGenerator::new(profile, 42, reference).unwrap()
}

fn collect(generator: &FixtureGenerator, table: FixtureTable) -> (Vec<FixtureRow>, DefectTally) {
    let mut rows = generator.table(table);
    let collected: Vec<FixtureRow> = rows.by_ref().collect();
    (collected, rows.tally().clone())
}

/// Assert a binomial count lies within five standard deviations.
fn assert_rate(kind: DefectKind, observed: u64, trials: u64, rate: f64) {
    let expected = trials as f64 * rate;
    let sigma = (trials as f64 * rate * (1.0 - rate)).sqrt();
    let diff = (observed as f64 - expected).abs();
    assert!(
        diff <= 5.0 * sigma + 1.0,
        "{kind:?}: observed {observed}, expected {expected:.1} (sigma {sigma:.1})"
    );
}

#[test]
fn default_row_counts_match_fixture_constants() {
    let generator = generator(FixtureProfile::default());
    assert_eq!(generator.table(FixtureTable::Categories).len(), 8);
    assert_eq!(generator.table(FixtureTable::Suppliers).len(), 5_000);
    assert_eq!(generator.table(FixtureTable::Customers).len(), 900_000);
    assert_eq!(generator.table(FixtureTable::Products).len(), 150_000);
}

#[test]
fn customer_defects_converge() {
    let mut profile = FixtureProfile::default();
    profile.row_counts.customers = 100_000;
    let generator = generator(profile.clone());
    let reference = generator.reference();

    let (rows, tally) = collect(&generator, FixtureTable::Customers);
    assert_eq!(rows.len(), 100_000);

    let null_names = rows
        .iter()
        .filter(|r| r.get("CustomerName").unwrap().is_null())
        .count() as u64;
    let bad_emails = rows
        .iter()
        .filter(|r| !is_well_formed_email(r.get("Email").unwrap().as_str().unwrap()))
        .count() as u64;
    let future = rows
        .iter()
        .filter(|r| r.get("CreatedDate").unwrap().as_datetime().unwrap() > reference)
        .count() as u64;

    assert_eq!(null_names, tally.count(DefectKind::NullCustomerName));
    assert_eq!(bad_emails, tally.count(DefectKind::InvalidEmail));
    assert_eq!(future, tally.count(DefectKind::FutureCreatedDate));

    let n = rows.len() as u64;
    assert_rate(DefectKind::NullCustomerName, null_names, n, profile.defects.null_customer_name);
    assert_rate(DefectKind::InvalidEmail, bad_emails, n, profile.defects.invalid_email);
    assert_rate(DefectKind::FutureCreatedDate, future, n, profile.defects.future_created_date);
}

#[test]
fn product_defects_converge() {
    let profile = FixtureProfile::default();
    let generator = generator(profile.clone());

    let (rows, tally) = collect(&generator, FixtureTable::Products);
    assert_eq!(rows.len(), 150_000);

    let mut null_names = 0u64;
    let mut negative_prices = 0u64;
    let mut negative_stock = 0u64;
    let mut orphaned = 0u64;

    for row in &rows {
        if row.get("ProductName").unwrap().is_null() {
            null_names += 1;
        }
        if row.get("UnitPrice").unwrap().as_decimal().unwrap() < Decimal::ZERO {
            negative_prices += 1;
        }
        if row.get("StockQuantity").unwrap().as_i32().unwrap() < 0 {
            negative_stock += 1;
        }
        if row.get("SupplierID").unwrap().as_i32().unwrap() > 5_000 {
            orphaned += 1;
        }
        let category = row.get("CategoryID").unwrap().as_i32().unwrap();
        assert!((1..=8).contains(&category));
    }

    assert_eq!(null_names, tally.count(DefectKind::NullProductName));
    assert_eq!(negative_prices, tally.count(DefectKind::NegativeUnitPrice));
    assert_eq!(negative_stock, tally.count(DefectKind::NegativeStockQuantity));
    assert_eq!(orphaned, tally.count(DefectKind::OrphanedSupplierId));

    let n = rows.len() as u64;
    let rates = &profile.defects;
    assert_rate(DefectKind::NullProductName, null_names, n, rates.null_product_name);
    assert_rate(DefectKind::NegativeUnitPrice, negative_prices, n, rates.negative_unit_price);
    assert_rate(DefectKind::NegativeStockQuantity, negative_stock, n, rates.negative_stock_quantity);
    assert_rate(DefectKind::OrphanedSupplierId, orphaned, n, rates.orphaned_supplier_id);
}

#[test]
fn dangling_supplier_ids_are_uniform() {
    let generator = generator(FixtureProfile::default());
    let (rows, _) = collect(&generator, FixtureTable::Products);

    // Ten buckets of 100 ids over 5001..=6000.
    let mut buckets = [0u64; 10];
    for row in &rows {
        let id = row.get("SupplierID").unwrap().as_i32().unwrap();
        assert!((1..=6_000).contains(&id), "supplier id {id} out of range");
        if id > 5_000 {
            buckets[((id - 5_001) / 100) as usize] += 1;
        }
    }

    let total: u64 = buckets.iter().sum();
    let expected = total as f64 / 10.0;
    let sigma = (total as f64 * 0.1 * 0.9).sqrt();
    for (i, count) in buckets.iter().enumerate() {
        assert!(
            (*count as f64 - expected).abs() <= 5.0 * sigma,
            "bucket {i}: {count} vs expected {expected:.0}"
        );
    }
}

#[test]
fn product_names_cycle_through_fixed_list() {
    let mut profile = FixtureProfile::default();
    profile.row_counts.products = 1_000;
    profile.defects.null_product_name = 0.0;
    let generator = generator(profile);

    let (rows, _) = collect(&generator, FixtureTable::Products);
    for (i, row) in rows.iter().enumerate() {
        let expected = fixture_generator::reference::PRODUCT_NAMES[i % 25];
        assert_eq!(row.get("ProductName").unwrap().as_str(), Some(expected));
    }
}

#[test]
fn same_seed_same_rows_across_generators() {
    let mut profile = FixtureProfile::default();
    profile.row_counts.suppliers = 500;
    profile.row_counts.customers = 2_000;
    profile.row_counts.products = 2_000;

    for table in FixtureTable::ALL {
        let (a, ta) = collect(&generator(profile.clone()), table);
        let (b, tb) = collect(&generator(profile.clone()), table);
        assert_eq!(a, b, "{table} differs between runs");
        assert_eq!(ta, tb);
    }
}
