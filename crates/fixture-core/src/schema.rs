//! Table definitions for the fixture.
//!
//! The fixture always consists of the same four tables. [`FixtureTable`]
//! names them and [`TableDefinition`] describes their columns so that each
//! loader backend can derive DDL and INSERT statements from one place.

use crate::types::ColumnType;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Table name does not match any fixture table
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    /// Column not found in table
    #[error("Column '{column}' not found in table '{table}'")]
    ColumnNotFound { table: String, column: String },
}

// ============================================================================
// Definitions
// ============================================================================

/// Column definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    /// Column name
    pub name: String,

    /// Column type
    pub column_type: ColumnType,

    /// Whether this column is nullable
    pub nullable: bool,
}

impl ColumnDefinition {
    /// Create a new non-nullable column definition.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: false,
        }
    }

    /// Create a new nullable column definition.
    pub fn nullable(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: true,
        }
    }
}

/// Table definition: integer primary key plus ordered columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    /// Table name
    pub name: String,

    /// Integer primary key column name
    pub primary_key: String,

    /// Column definitions (excluding primary key), in insert order
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Position of a column within `columns`.
    pub fn column_index(&self, name: &str) -> Result<usize, SchemaError> {
        self.columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| SchemaError::ColumnNotFound {
                table: self.name.clone(),
                column: name.to_string(),
            })
    }

    /// All column names including the primary key, in insert order.
    pub fn insert_columns(&self) -> Vec<&str> {
        std::iter::once(self.primary_key.as_str())
            .chain(self.columns.iter().map(|c| c.name.as_str()))
            .collect()
    }

    /// Column tuples in the shape DDL generators take.
    pub fn ddl_columns(&self) -> Vec<(String, ColumnType, bool)> {
        self.columns
            .iter()
            .map(|c| (c.name.clone(), c.column_type, c.nullable))
            .collect()
    }
}

/// The four fixture tables, in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FixtureTable {
    Categories,
    Suppliers,
    Customers,
    Products,
}

impl FixtureTable {
    /// Every table in load order. Referenced tables come first.
    pub const ALL: [FixtureTable; 4] = [
        FixtureTable::Categories,
        FixtureTable::Suppliers,
        FixtureTable::Customers,
        FixtureTable::Products,
    ];

    /// Table name as created in the database.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Categories => "Categories",
            Self::Suppliers => "Suppliers",
            Self::Customers => "Customers",
            Self::Products => "Products",
        }
    }

    /// Primary key column name.
    pub fn primary_key(&self) -> &'static str {
        match self {
            Self::Categories => "CategoryID",
            Self::Suppliers => "SupplierID",
            Self::Customers => "CustomerID",
            Self::Products => "ProductID",
        }
    }

    /// Stable per-table salt mixed into the generator seed.
    pub fn seed_salt(&self) -> u64 {
        match self {
            Self::Categories => 1,
            Self::Suppliers => 2,
            Self::Customers => 3,
            Self::Products => 4,
        }
    }

    /// Full table definition.
    pub fn definition(&self) -> TableDefinition {
        use ColumnType::*;

        let columns = match self {
            Self::Categories => vec![
                ColumnDefinition::new("CategoryName", VarChar { length: 50 }),
                ColumnDefinition::new("Description", Text),
            ],
            Self::Suppliers => vec![
                ColumnDefinition::new("SupplierName", VarChar { length: 150 }),
                ColumnDefinition::new("ContactName", VarChar { length: 100 }),
                ColumnDefinition::new("Country", VarChar { length: 100 }),
                ColumnDefinition::new("Phone", VarChar { length: 20 }),
            ],
            Self::Customers => vec![
                ColumnDefinition::nullable("CustomerName", VarChar { length: 100 }),
                ColumnDefinition::new("Email", VarChar { length: 100 }),
                ColumnDefinition::new("Phone", VarChar { length: 20 }),
                ColumnDefinition::new("Country", VarChar { length: 100 }),
                ColumnDefinition::new("CreatedDate", LocalDateTime),
                ColumnDefinition::new("IsActive", Bool),
            ],
            Self::Products => vec![
                ColumnDefinition::nullable("ProductName", VarChar { length: 200 }),
                ColumnDefinition::new("CategoryID", Int32),
                ColumnDefinition::new("SupplierID", Int32),
                ColumnDefinition::new("UnitPrice", Money),
                ColumnDefinition::new("StockQuantity", Int32),
                ColumnDefinition::new("CreatedDate", LocalDateTime),
            ],
        };

        TableDefinition {
            name: self.name().to_string(),
            primary_key: self.primary_key().to_string(),
            columns,
        }
    }
}

impl fmt::Display for FixtureTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FixtureTable {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SchemaError::UnknownTable(s.to_string()))
    }
}
