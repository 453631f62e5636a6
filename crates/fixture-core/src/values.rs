//! Value representations for generated fixture rows.
//!
//! Values are what the generator hands to loaders. Intentionally invalid
//! data (negative prices, orphaned ids, malformed emails) is still a valid
//! `FixtureValue`: defects live in the data, not in the type.

use crate::schema::{FixtureTable, SchemaError};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// A single generated column value.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureValue {
    /// Boolean value
    Bool(bool),

    /// 32-bit signed integer
    Int32(i32),

    /// Currency amount, scale 4
    Money(Decimal),

    /// String value
    String(String),

    /// Timestamp without timezone
    DateTime(NaiveDateTime),

    /// Null value
    Null,
}

impl FixtureValue {
    /// Wrap an optional string, mapping `None` to `Null`.
    pub fn optional_string(value: Option<String>) -> Self {
        value.map(Self::String).unwrap_or(Self::Null)
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a decimal.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Money(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a timestamp.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

/// A generated row.
///
/// `values` follows the column order of [`FixtureTable::definition`],
/// excluding the primary key which is held in `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureRow {
    /// Table this row belongs to
    pub table: FixtureTable,

    /// 1-based primary key
    pub id: i32,

    /// Column values in definition order
    pub values: Vec<FixtureValue>,
}

impl FixtureRow {
    /// Create a new row.
    pub fn new(table: FixtureTable, id: i32, values: Vec<FixtureValue>) -> Self {
        Self { table, id, values }
    }

    /// Look up a value by column name.
    pub fn get(&self, column: &str) -> Result<&FixtureValue, SchemaError> {
        let idx = self.table.definition().column_index(column)?;
        self.values
            .get(idx)
            .ok_or_else(|| SchemaError::ColumnNotFound {
                table: self.table.name().to_string(),
                column: column.to_string(),
            })
    }
}
