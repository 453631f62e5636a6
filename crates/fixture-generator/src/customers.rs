//! Customer rows.
//!
//! Three independent defect rolls are drawn for every row, in this order:
//! NULL name, malformed email, future sign-up date.

use crate::generator::{row_id, GenerationContext};
use crate::generators::person::customer_email;
use crate::generators::roll_defect;
use crate::generators::text::truncate_chars;
use crate::generators::timestamp::{future_datetime, past_datetime, CUSTOMER_HISTORY_DAYS};
use fake::faker::address::en::CountryName;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use fixture_core::{DefectKind, DefectTally, FixtureRow, FixtureTable, FixtureValue};
use rand::Rng;

/// Generate the customer row at `index`.
pub fn generate_customer<D: Rng, F: Rng>(
    index: u64,
    ctx: &GenerationContext,
    decisions: &mut D,
    faker: &mut F,
    tally: &mut DefectTally,
) -> FixtureRow {
    let rates = &ctx.profile.defects;
    let null_name = roll_defect(decisions, rates.null_customer_name, DefectKind::NullCustomerName, tally);
    let bad_email = roll_defect(decisions, rates.invalid_email, DefectKind::InvalidEmail, tally);
    let future = roll_defect(decisions, rates.future_created_date, DefectKind::FutureCreatedDate, tally);

    let name: Option<String> = if null_name {
        None
    } else {
        let full: String = Name().fake_with_rng(faker);
        Some(truncate_chars(&full, 100))
    };
    let email = customer_email(name.as_deref(), bad_email, decisions, faker);

    let phone: String = PhoneNumber().fake_with_rng(faker);
    let country: String = CountryName().fake_with_rng(faker);

    let created = if future {
        future_datetime(faker, ctx.reference)
    } else {
        past_datetime(faker, ctx.reference, CUSTOMER_HISTORY_DAYS)
    };

    FixtureRow::new(
        FixtureTable::Customers,
        row_id(index),
        vec![
            FixtureValue::optional_string(name),
            FixtureValue::String(truncate_chars(&email, 100)),
            FixtureValue::String(truncate_chars(&phone, 20)),
            FixtureValue::String(truncate_chars(&country, 100)),
            FixtureValue::DateTime(created),
            FixtureValue::Bool(decisions.random_bool(0.5)),
        ],
    )
}
