//! Product rows.

use crate::generator::{row_id, GenerationContext};
use crate::generators::numeric::{int_range, money_range};
use crate::generators::roll_defect;
use crate::generators::timestamp::{past_datetime, PRODUCT_HISTORY_DAYS};
use crate::reference::{category_id_range, product_name};
use fixture_core::{DefectKind, DefectTally, FixtureRow, FixtureTable, FixtureValue};
use rand::Rng;

/// Generate the product row at `index`.
///
/// The product name cycles through the fixed list by index; every other
/// value is drawn independently.
pub fn generate_product<D: Rng, F: Rng>(
    index: u64,
    ctx: &GenerationContext,
    decisions: &mut D,
    faker: &mut F,
    tally: &mut DefectTally,
) -> FixtureRow {
    let profile = &ctx.profile;
    let rates = &profile.defects;

    let name = if roll_defect(decisions, rates.null_product_name, DefectKind::NullProductName, tally) {
        FixtureValue::Null
    } else {
        FixtureValue::String(product_name(index).to_string())
    };

    let price = if roll_defect(decisions, rates.negative_unit_price, DefectKind::NegativeUnitPrice, tally) {
        -money_range(decisions, 10.0, 1000.0)
    } else {
        money_range(decisions, 5.0, 2000.0)
    };

    let stock = if roll_defect(
        decisions,
        rates.negative_stock_quantity,
        DefectKind::NegativeStockQuantity,
        tally,
    ) {
        -int_range(decisions, 1, 100)
    } else {
        int_range(decisions, 0, 1000)
    };

    // With no suppliers at all every reference dangles.
    let orphan_roll = decisions.random_bool(rates.orphaned_supplier_id);
    let orphaned = orphan_roll || profile.row_counts.suppliers == 0;
    let (lo, hi) = if orphaned {
        tally.record(DefectKind::OrphanedSupplierId);
        profile.orphaned_supplier_ids()
    } else {
        profile.valid_supplier_ids()
    };
    let supplier_id = int_range(decisions, lo, hi);

    let (cat_lo, cat_hi) = category_id_range();
    let category_id = int_range(decisions, cat_lo, cat_hi);

    let created = past_datetime(faker, ctx.reference, PRODUCT_HISTORY_DAYS);

    FixtureRow::new(
        FixtureTable::Products,
        row_id(index),
        vec![
            name,
            FixtureValue::Int32(category_id),
            FixtureValue::Int32(supplier_id),
            FixtureValue::Money(price),
            FixtureValue::Int32(stock),
            FixtureValue::DateTime(created),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::timestamp::parse_reference_date;
    use fixture_core::FixtureProfile;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal::Decimal;

    fn context(profile: FixtureProfile) -> GenerationContext {
        GenerationContext {
            profile,
            reference: parse_reference_date("2024-06-01").unwrap(),
        }
    }

    fn generate(ctx: &GenerationContext, count: u64) -> (Vec<FixtureRow>, DefectTally) {
        let mut decisions = StdRng::seed_from_u64(5);
        let mut faker = StdRng::seed_from_u64(6);
        let mut tally = DefectTally::new();
        let rows = (0..count)
            .map(|i| generate_product(i, ctx, &mut decisions, &mut faker, &mut tally))
            .collect();
        (rows, tally)
    }

    #[test]
    fn test_clean_product_ranges() {
        let mut profile = FixtureProfile::default();
        profile.defects = fixture_core::DefectRates {
            null_customer_name: 0.0,
            invalid_email: 0.0,
            future_created_date: 0.0,
            null_product_name: 0.0,
            negative_unit_price: 0.0,
            negative_stock_quantity: 0.0,
            orphaned_supplier_id: 0.0,
        };
        let ctx = context(profile);
        let (rows, tally) = generate(&ctx, 500);

        for (i, row) in rows.iter().enumerate() {
            assert_eq!(
                row.get("ProductName").unwrap().as_str(),
                Some(product_name(i as u64))
            );
            let category = row.get("CategoryID").unwrap().as_i32().unwrap();
            assert!((1..=8).contains(&category));
            let supplier = row.get("SupplierID").unwrap().as_i32().unwrap();
            assert!((1..=5000).contains(&supplier));
            let price = row.get("UnitPrice").unwrap().as_decimal().unwrap();
            assert!(price >= Decimal::new(5, 0) && price <= Decimal::new(2000, 0));
            let stock = row.get("StockQuantity").unwrap().as_i32().unwrap();
            assert!((0..=1000).contains(&stock));
        }
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn test_forced_defects() {
        let mut profile = FixtureProfile::default();
        profile.defects.null_product_name = 1.0;
        profile.defects.negative_unit_price = 1.0;
        profile.defects.negative_stock_quantity = 1.0;
        profile.defects.orphaned_supplier_id = 1.0;
        let ctx = context(profile);
        let (rows, tally) = generate(&ctx, 200);

        for row in &rows {
            assert!(row.get("ProductName").unwrap().is_null());
            let price = row.get("UnitPrice").unwrap().as_decimal().unwrap();
            assert!(price <= Decimal::new(-10, 0) && price >= Decimal::new(-1000, 0));
            let stock = row.get("StockQuantity").unwrap().as_i32().unwrap();
            assert!((-100..=-1).contains(&stock));
            let supplier = row.get("SupplierID").unwrap().as_i32().unwrap();
            assert!((5001..=6000).contains(&supplier));
        }
        for kind in [
            DefectKind::NullProductName,
            DefectKind::NegativeUnitPrice,
            DefectKind::NegativeStockQuantity,
            DefectKind::OrphanedSupplierId,
        ] {
            assert_eq!(tally.count(kind), 200);
        }
    }

    #[test]
    fn test_no_suppliers_means_all_orphaned() {
        let mut profile = FixtureProfile::default();
        profile.row_counts.suppliers = 0;
        profile.defects.orphaned_supplier_id = 0.0;
        let ctx = context(profile);
        let (rows, tally) = generate(&ctx, 20);

        for row in &rows {
            let supplier = row.get("SupplierID").unwrap().as_i32().unwrap();
            assert!((1..=1000).contains(&supplier));
        }
        assert_eq!(tally.count(DefectKind::OrphanedSupplierId), 20);
    }
}
