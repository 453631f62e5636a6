//! Fixture profile: row counts, batch size and defect rates.
//!
//! The defaults reproduce the standard UAT fixture (8 / 5,000 / 900,000 /
//! 150,000 rows). A YAML profile may override any subset of fields:
//!
//! ```yaml
//! version: 1
//! batch_size: 5000
//! row_counts:
//!   customers: 10000
//! defects:
//!   invalid_email: 0.05
//! ```

use crate::defects::DefectKind;
use crate::schema::FixtureTable;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of fixed category rows.
pub const CATEGORY_COUNT: u64 = 8;

/// Error type for profile loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Error reading profile file
    #[error("Failed to read profile file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Rate outside [0, 1]
    #[error("Defect rate for {kind:?} must be within [0, 1], got {rate}")]
    InvalidRate { kind: DefectKind, rate: f64 },

    /// Zero batch size
    #[error("Batch size must be greater than zero")]
    ZeroBatchSize,

    /// Row count outside the i32 id space
    #[error("Row count for {table} exceeds the INT primary key range: {count}")]
    RowCountTooLarge { table: FixtureTable, count: u64 },

    /// No room for orphaned supplier ids
    #[error("Orphaned supplier span must be greater than zero")]
    ZeroOrphanSpan,
}

/// Rows generated per table. Categories are fixed reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowCounts {
    pub suppliers: u64,
    pub customers: u64,
    pub products: u64,
}

impl Default for RowCounts {
    fn default() -> Self {
        Self {
            suppliers: 5_000,
            customers: 900_000,
            products: 150_000,
        }
    }
}

/// Per-row probability of injecting each defect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefectRates {
    pub null_customer_name: f64,
    pub invalid_email: f64,
    pub future_created_date: f64,
    pub null_product_name: f64,
    pub negative_unit_price: f64,
    pub negative_stock_quantity: f64,
    pub orphaned_supplier_id: f64,
}

impl Default for DefectRates {
    fn default() -> Self {
        Self {
            null_customer_name: 0.005,
            invalid_email: 0.01,
            future_created_date: 0.01,
            null_product_name: 0.002,
            negative_unit_price: 0.005,
            negative_stock_quantity: 0.01,
            orphaned_supplier_id: 0.16,
        }
    }
}

impl DefectRates {
    /// Configured rate for a defect kind.
    pub fn rate(&self, kind: DefectKind) -> f64 {
        match kind {
            DefectKind::NullCustomerName => self.null_customer_name,
            DefectKind::InvalidEmail => self.invalid_email,
            DefectKind::FutureCreatedDate => self.future_created_date,
            DefectKind::NullProductName => self.null_product_name,
            DefectKind::NegativeUnitPrice => self.negative_unit_price,
            DefectKind::NegativeStockQuantity => self.negative_stock_quantity,
            DefectKind::OrphanedSupplierId => self.orphaned_supplier_id,
        }
    }
}

fn default_version() -> u32 {
    1
}

fn default_batch_size() -> usize {
    10_000
}

fn default_orphan_span() -> u32 {
    1_000
}

/// Complete fixture profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureProfile {
    /// Profile format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Seed used when none is given on the command line
    #[serde(default)]
    pub seed: Option<u64>,

    /// Rows per INSERT batch; each batch is committed on its own
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Rows per table
    #[serde(default)]
    pub row_counts: RowCounts,

    /// Defect injection rates
    #[serde(default)]
    pub defects: DefectRates,

    /// Width of the dangling supplier id range that follows the valid ids
    #[serde(default = "default_orphan_span")]
    pub orphan_supplier_span: u32,
}

impl Default for FixtureProfile {
    fn default() -> Self {
        Self {
            version: default_version(),
            seed: None,
            batch_size: default_batch_size(),
            row_counts: RowCounts::default(),
            defects: DefectRates::default(),
            orphan_supplier_span: default_orphan_span(),
        }
    }
}

impl FixtureProfile {
    /// Load a profile from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a profile from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_yaml::from_str(yaml)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Serialize the profile back to YAML.
    pub fn to_yaml(&self) -> Result<String, ProfileError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check rates, batch size and id ranges.
    pub fn validate(&self) -> Result<(), ProfileError> {
        for kind in DefectKind::ALL {
            let rate = self.defects.rate(kind);
            if !(0.0..=1.0).contains(&rate) {
                return Err(ProfileError::InvalidRate { kind, rate });
            }
        }

        if self.batch_size == 0 {
            return Err(ProfileError::ZeroBatchSize);
        }

        if self.orphan_supplier_span == 0 {
            return Err(ProfileError::ZeroOrphanSpan);
        }

        for table in FixtureTable::ALL {
            let rows = self.row_count(table);
            let count = match table {
                // Dangling supplier ids follow the last valid one
                FixtureTable::Suppliers => rows.checked_add(self.orphan_supplier_span as u64),
                _ => Some(rows),
            };
            match count {
                Some(count) if count <= i32::MAX as u64 => {}
                _ => {
                    return Err(ProfileError::RowCountTooLarge {
                        table,
                        count: rows,
                    })
                }
            }
        }

        Ok(())
    }

    /// Rows generated for a table.
    pub fn row_count(&self, table: FixtureTable) -> u64 {
        match table {
            FixtureTable::Categories => CATEGORY_COUNT,
            FixtureTable::Suppliers => self.row_counts.suppliers,
            FixtureTable::Customers => self.row_counts.customers,
            FixtureTable::Products => self.row_counts.products,
        }
    }

    /// Total rows across all tables.
    pub fn total_rows(&self) -> u64 {
        FixtureTable::ALL.iter().map(|t| self.row_count(*t)).sum()
    }

    /// Inclusive range of supplier ids that exist.
    pub fn valid_supplier_ids(&self) -> (i32, i32) {
        (1, self.row_counts.suppliers as i32)
    }

    /// Inclusive range of supplier ids that are deliberately dangling.
    pub fn orphaned_supplier_ids(&self) -> (i32, i32) {
        let first = self.row_counts.suppliers as i32 + 1;
        (first, first + (self.orphan_supplier_span as i32 - 1))
    }

    /// Expected number of rows carrying a defect.
    pub fn expected_defects(&self, kind: DefectKind) -> f64 {
        self.defects.rate(kind) * self.row_count(kind.table()) as f64
    }
}
