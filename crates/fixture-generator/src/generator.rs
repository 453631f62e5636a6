//! Main data generator for producing fixture rows.

use crate::customers::generate_customer;
use crate::products::generate_product;
use crate::suppliers::{category_row, generate_supplier};
use chrono::NaiveDateTime;
use fixture_core::{DefectTally, FixtureProfile, FixtureRow, FixtureTable, ProfileError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Profile failed validation
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),
}

/// Settings shared by every row builder.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// Row counts and defect rates
    pub profile: FixtureProfile,
    /// Instant treated as "now" by every date window
    pub reference: NaiveDateTime,
}

/// 1-based primary key for a 0-based row index.
///
/// Profile validation keeps row counts inside the INT range.
pub(crate) fn row_id(index: u64) -> i32 {
    (index + 1) as i32
}

/// Deterministic generator for the whole fixture.
///
/// Each table gets its own RNG streams, derived from the base seed and the
/// table's salt, so generating one table never shifts another.
pub struct FixtureGenerator {
    context: Arc<GenerationContext>,
    seed: u64,
}

impl FixtureGenerator {
    /// Create a new generator. Fails if the profile does not validate.
    pub fn new(
        profile: FixtureProfile,
        seed: u64,
        reference: NaiveDateTime,
    ) -> Result<Self, GeneratorError> {
        profile.validate()?;
        Ok(Self {
            context: Arc::new(GenerationContext { profile, reference }),
            seed,
        })
    }

    /// Base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Profile in use.
    pub fn profile(&self) -> &FixtureProfile {
        &self.context.profile
    }

    /// Reference date in use.
    pub fn reference(&self) -> NaiveDateTime {
        self.context.reference
    }

    /// Compute the seed of one RNG stream of a table.
    fn stream_seed(&self, table: FixtureTable, stream: u64) -> u64 {
        let salt = table.seed_salt().wrapping_mul(2).wrapping_add(stream);
        self.seed.wrapping_add(salt.wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Start generating a table from its first row.
    pub fn table(&self, table: FixtureTable) -> TableGenerator {
        TableGenerator {
            table,
            context: Arc::clone(&self.context),
            decisions: StdRng::seed_from_u64(self.stream_seed(table, 0)),
            faker: StdRng::seed_from_u64(self.stream_seed(table, 1)),
            index: 0,
            count: self.context.profile.row_count(table),
            tally: DefectTally::new(),
        }
    }
}

/// Lazily generates the rows of one table.
pub struct TableGenerator {
    table: FixtureTable,
    context: Arc<GenerationContext>,
    /// Defect rolls, choices and numeric draws
    decisions: StdRng,
    /// Faker content and dates
    faker: StdRng,
    index: u64,
    count: u64,
    tally: DefectTally,
}

impl TableGenerator {
    /// Table being generated.
    pub fn table(&self) -> FixtureTable {
        self.table
    }

    /// Index of the next row.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Total rows this generator produces.
    pub fn total(&self) -> u64 {
        self.count
    }

    /// Rows not yet generated.
    pub fn remaining(&self) -> u64 {
        self.count - self.index
    }

    /// Defects injected so far.
    pub fn tally(&self) -> &DefectTally {
        &self.tally
    }

    /// Generate the next row, or `None` once the table is complete.
    pub fn next_row(&mut self) -> Option<FixtureRow> {
        if self.index >= self.count {
            return None;
        }

        let index = self.index;
        let ctx = self.context.as_ref();
        let row = match self.table {
            FixtureTable::Categories => category_row(index)?,
            FixtureTable::Suppliers => {
                generate_supplier(index, &mut self.decisions, &mut self.faker)
            }
            FixtureTable::Customers => generate_customer(
                index,
                ctx,
                &mut self.decisions,
                &mut self.faker,
                &mut self.tally,
            ),
            FixtureTable::Products => generate_product(
                index,
                ctx,
                &mut self.decisions,
                &mut self.faker,
                &mut self.tally,
            ),
        };

        self.index += 1;
        Some(row)
    }

    /// Generate up to `size` rows.
    pub fn next_batch(&mut self, size: usize) -> Vec<FixtureRow> {
        let take = std::cmp::min(size as u64, self.remaining()) as usize;
        let mut batch = Vec::with_capacity(take);
        for _ in 0..take {
            match self.next_row() {
                Some(row) => batch.push(row),
                None => break,
            }
        }
        batch
    }
}

impl Iterator for TableGenerator {
    type Item = FixtureRow;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TableGenerator {}
