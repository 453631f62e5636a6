//! Batched INSERT logic for MySQL.

use crate::ddl::MySQLDdl;
use crate::error::MySQLLoaderError;
use chrono::{Datelike, Timelike};
use fixture_core::{ColumnType, FixtureRow, FixtureValue, TableDefinition, ToDdl};
use mysql_async::{prelude::*, Conn, Params, TxOpts, Value};

/// Placeholders a prepared statement may carry.
pub const MAX_PLACEHOLDERS: usize = 65_535;

/// Rows that fit in one INSERT statement for a table.
pub fn rows_per_statement(table: &TableDefinition) -> usize {
    MAX_PLACEHOLDERS / (table.columns.len() + 1)
}

/// Build a multi-row `INSERT ... VALUES (?, ...), (...)` statement.
pub fn build_insert_sql(table: &TableDefinition, row_count: usize) -> String {
    let ddl = MySQLDdl;
    let columns = table.insert_columns();

    let col_placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
    let row_template = format!("({})", col_placeholders.join(", "));
    let rows_template: Vec<&str> = (0..row_count).map(|_| row_template.as_str()).collect();

    format!(
        "INSERT INTO {} ({}) VALUES {}",
        ddl.quote_ident(&table.name),
        columns
            .iter()
            .map(|c| ddl.quote_ident(c))
            .collect::<Vec<_>>()
            .join(", "),
        rows_template.join(", ")
    )
}

/// Insert a batch of rows and commit it.
///
/// The batch runs in its own transaction on `conn`. Batches larger than
/// [`rows_per_statement`] are split into several statements within it.
pub async fn insert_batch(
    conn: &mut Conn,
    table: &TableDefinition,
    rows: &[FixtureRow],
) -> Result<u64, MySQLLoaderError> {
    if rows.is_empty() {
        return Ok(0);
    }

    let mut transaction = conn.start_transaction(TxOpts::default()).await?;
    for chunk in rows.chunks(rows_per_statement(table)) {
        let sql = build_insert_sql(table, chunk.len());
        let params = build_params(table, chunk)?;
        transaction.exec_drop(&sql, Params::Positional(params)).await?;
    }
    transaction.commit().await?;

    Ok(rows.len() as u64)
}

/// Flatten rows into positional parameters, primary key first.
pub fn build_params(
    table: &TableDefinition,
    rows: &[FixtureRow],
) -> Result<Vec<Value>, MySQLLoaderError> {
    let mut params: Vec<Value> = Vec::with_capacity(rows.len() * (table.columns.len() + 1));

    for row in rows {
        if row.values.len() != table.columns.len() {
            return Err(MySQLLoaderError::RowWidth {
                table: table.name.clone(),
                id: row.id,
                expected: table.columns.len(),
                actual: row.values.len(),
            });
        }

        params.push(Value::Int(row.id as i64));
        for (column, value) in table.columns.iter().zip(&row.values) {
            let param = to_mysql_value(value, &column.column_type).ok_or_else(|| {
                MySQLLoaderError::ValueType {
                    table: table.name.clone(),
                    column: column.name.clone(),
                }
            })?;
            params.push(param);
        }
    }

    Ok(params)
}

/// Convert a value to a MySQL parameter for its column type.
///
/// Returns `None` when the value does not belong in the column.
pub fn to_mysql_value(value: &FixtureValue, column_type: &ColumnType) -> Option<Value> {
    let param = match (value, column_type) {
        (FixtureValue::Null, _) => Value::NULL,
        (FixtureValue::Bool(b), ColumnType::Bool) => Value::Int(if *b { 1 } else { 0 }),
        (FixtureValue::Int32(i), ColumnType::Int32) => Value::Int(*i as i64),
        // Decimal - sent as string for precision
        (FixtureValue::Money(d), ColumnType::Money) => Value::Bytes(d.to_string().into_bytes()),
        (FixtureValue::String(s), ColumnType::VarChar { .. } | ColumnType::Text) => {
            Value::Bytes(s.clone().into_bytes())
        }
        (FixtureValue::DateTime(dt), ColumnType::LocalDateTime) => Value::Date(
            dt.year() as u16,
            dt.month() as u8,
            dt.day() as u8,
            dt.hour() as u8,
            dt.minute() as u8,
            dt.second() as u8,
            dt.nanosecond() / 1000, // MySQL uses microseconds
        ),
        _ => return None,
    };
    Some(param)
}
