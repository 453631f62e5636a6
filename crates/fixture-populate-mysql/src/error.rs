//! Error types for the MySQL loader.

use thiserror::Error;

/// Errors that can occur while loading into MySQL.
#[derive(Error, Debug)]
pub enum MySQLLoaderError {
    /// MySQL connection or query error.
    #[error("MySQL error: {0}")]
    MySQL(#[from] mysql_async::Error),

    /// A value does not fit the column it is bound to.
    #[error("Value for column '{column}' of '{table}' does not match its type")]
    ValueType { table: String, column: String },

    /// A row carries a different number of values than the table has columns.
    #[error("Row {id} of '{table}' has {actual} values, expected {expected}")]
    RowWidth {
        table: String,
        id: i32,
        expected: usize,
        actual: usize,
    },
}
