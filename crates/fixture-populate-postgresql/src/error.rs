//! Error types for the PostgreSQL loader.

use thiserror::Error;

/// Errors that can occur while loading into PostgreSQL.
#[derive(Error, Debug)]
pub enum PostgreSQLLoaderError {
    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

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
