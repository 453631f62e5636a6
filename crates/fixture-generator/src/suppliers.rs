//! Supplier and category rows.

use crate::generator::row_id;
use crate::generators::text::truncate_chars;
use crate::reference::{generate_supplier_name, CATEGORIES};
use fake::faker::address::en::CountryName;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use fixture_core::{FixtureRow, FixtureTable, FixtureValue};
use rand::Rng;

/// Generate the supplier row at `index`.
pub fn generate_supplier<D: Rng, F: Rng>(index: u64, decisions: &mut D, faker: &mut F) -> FixtureRow {
    let name = generate_supplier_name(decisions, faker);
    let contact: String = Name().fake_with_rng(faker);
    let country: String = CountryName().fake_with_rng(faker);
    let phone: String = PhoneNumber().fake_with_rng(faker);

    FixtureRow::new(
        FixtureTable::Suppliers,
        row_id(index),
        vec![
            FixtureValue::String(truncate_chars(&name, 150)),
            FixtureValue::String(truncate_chars(&contact, 100)),
            FixtureValue::String(truncate_chars(&country, 100)),
            FixtureValue::String(truncate_chars(&phone, 20)),
        ],
    )
}

/// Category row at `index`, or `None` past the fixed list.
pub fn category_row(index: u64) -> Option<FixtureRow> {
    let (name, description) = CATEGORIES.get(index as usize)?;
    Some(FixtureRow::new(
        FixtureTable::Categories,
        row_id(index),
        vec![
            FixtureValue::String(name.to_string()),
            FixtureValue::String(description.to_string()),
        ],
    ))
}
