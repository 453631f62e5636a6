//! Catalogue of injected data-quality defects.

use crate::schema::FixtureTable;
use std::collections::BTreeMap;

/// A data-quality defect the generator injects on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DefectKind {
    /// `Customers.CustomerName` is NULL
    NullCustomerName,
    /// `Customers.Email` has no valid domain (`first.last@invalid`)
    InvalidEmail,
    /// `Customers.CreatedDate` lies after the reference date
    FutureCreatedDate,
    /// `Products.ProductName` is NULL
    NullProductName,
    /// `Products.UnitPrice` is negative
    NegativeUnitPrice,
    /// `Products.StockQuantity` is negative
    NegativeStockQuantity,
    /// `Products.SupplierID` references no supplier
    OrphanedSupplierId,
}

impl DefectKind {
    pub const ALL: [DefectKind; 7] = [
        DefectKind::NullCustomerName,
        DefectKind::InvalidEmail,
        DefectKind::FutureCreatedDate,
        DefectKind::NullProductName,
        DefectKind::NegativeUnitPrice,
        DefectKind::NegativeStockQuantity,
        DefectKind::OrphanedSupplierId,
    ];

    /// Table the defect appears in.
    pub fn table(&self) -> FixtureTable {
        match self {
            Self::NullCustomerName | Self::InvalidEmail | Self::FutureCreatedDate => {
                FixtureTable::Customers
            }
            Self::NullProductName
            | Self::NegativeUnitPrice
            | Self::NegativeStockQuantity
            | Self::OrphanedSupplierId => FixtureTable::Products,
        }
    }

    /// Column the defect appears in.
    pub fn column(&self) -> &'static str {
        match self {
            Self::NullCustomerName => "CustomerName",
            Self::InvalidEmail => "Email",
            Self::FutureCreatedDate => "CreatedDate",
            Self::NullProductName => "ProductName",
            Self::NegativeUnitPrice => "UnitPrice",
            Self::NegativeStockQuantity => "StockQuantity",
            Self::OrphanedSupplierId => "SupplierID",
        }
    }

    /// Human readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NullCustomerName => "NULL CustomerName",
            Self::InvalidEmail => "Invalid email format",
            Self::FutureCreatedDate => "Future CreatedDate",
            Self::NullProductName => "NULL ProductName",
            Self::NegativeUnitPrice => "Negative UnitPrice",
            Self::NegativeStockQuantity => "Negative StockQuantity",
            Self::OrphanedSupplierId => "Orphaned SupplierID",
        }
    }
}

/// Running count of defects actually injected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefectTally {
    counts: BTreeMap<DefectKind, u64>,
}

impl DefectTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one injected defect.
    pub fn record(&mut self, kind: DefectKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    /// Number of injected defects of a kind.
    pub fn count(&self, kind: DefectKind) -> u64 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Number of injected defects across all kinds.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Add another tally into this one.
    pub fn merge(&mut self, other: &DefectTally) {
        for (kind, count) in &other.counts {
            *self.counts.entry(*kind).or_insert(0) += count;
        }
    }

    /// Counts for every kind, including zeros, in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (DefectKind, u64)> + '_ {
        DefectKind::ALL.into_iter().map(|k| (k, self.count(k)))
    }
}
