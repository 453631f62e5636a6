//! Common CLI argument definitions shared by all populators.

use chrono::{NaiveDateTime, NaiveTime, Utc};
use clap::Args;
use fixture_core::{FixtureProfile, FixtureTable, ProfileError, SchemaError};
use fixture_generator::parse_reference_date;
use std::path::PathBuf;

/// Seed used when neither the command line nor the profile sets one.
pub const DEFAULT_SEED: u64 = 42;

/// Errors resolving the effective configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Profile could not be loaded or failed validation.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// `--tables` named something that is not a fixture table.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// `--reference-date` did not parse.
    #[error("Invalid reference date '{0}': expected RFC 3339 or YYYY-MM-DD")]
    InvalidReferenceDate(String),
}

/// Common arguments shared by all populators.
///
/// Used by every `populate` subcommand (PostgreSQL, MySQL, dry-run) so the
/// same flags produce the same data on every backend.
#[derive(Args, Clone, Debug, Default)]
pub struct CommonPopulateArgs {
    /// Path to a fixture profile YAML file (row counts, batch size, defect rates)
    #[arg(long, short = 'p', env = "FIXTURE_PROFILE")]
    pub profile: Option<PathBuf>,

    /// Random seed for deterministic generation (same seed = same data) [default: 42]
    #[arg(long, env = "FIXTURE_SEED")]
    pub seed: Option<u64>,

    /// Rows per INSERT batch, each committed separately (overrides the profile)
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Instant treated as "now" for all generated dates (RFC 3339 or YYYY-MM-DD) [default: today 00:00 UTC]
    #[arg(long, env = "FIXTURE_REFERENCE_DATE")]
    pub reference_date: Option<String>,

    /// Specific tables to populate (comma-separated, empty = all four)
    #[arg(long, value_delimiter = ',')]
    pub tables: Vec<String>,

    /// Skip the SELECT COUNT(*) check after each table is loaded
    #[arg(long)]
    pub skip_verify: bool,
}

impl CommonPopulateArgs {
    /// Load the profile (or defaults) and apply command-line overrides.
    pub fn load_profile(&self) -> Result<FixtureProfile, ConfigError> {
        let mut profile = match &self.profile {
            Some(path) => FixtureProfile::from_file(path)?,
            None => FixtureProfile::default(),
        };

        if let Some(batch_size) = self.batch_size {
            profile.batch_size = batch_size;
        }
        profile.validate()?;

        Ok(profile)
    }

    /// Effective seed: command line, then profile, then [`DEFAULT_SEED`].
    pub fn resolve_seed(&self, profile: &FixtureProfile) -> u64 {
        self.seed.or(profile.seed).unwrap_or(DEFAULT_SEED)
    }

    /// Effective reference date.
    pub fn resolve_reference_date(&self) -> Result<NaiveDateTime, ConfigError> {
        match &self.reference_date {
            Some(s) => {
                parse_reference_date(s).ok_or_else(|| ConfigError::InvalidReferenceDate(s.clone()))
            }
            None => Ok(Utc::now().date_naive().and_time(NaiveTime::MIN)),
        }
    }

    /// Selected tables in load order, without duplicates.
    pub fn selected_tables(&self) -> Result<Vec<FixtureTable>, ConfigError> {
        if self.tables.is_empty() {
            return Ok(FixtureTable::ALL.to_vec());
        }

        let mut tables = self
            .tables
            .iter()
            .map(|s| s.parse::<FixtureTable>())
            .collect::<Result<Vec<_>, _>>()?;
        tables.sort();
        tables.dedup();
        Ok(tables)
    }
}
