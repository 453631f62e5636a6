//! Batched INSERT logic for PostgreSQL.

use crate::ddl::PostgreSQLDdl;
use crate::error::PostgreSQLLoaderError;
use chrono::NaiveDateTime;
use fixture_core::{ColumnType, FixtureRow, FixtureValue, TableDefinition, ToDdl};
use rust_decimal::Decimal;
use tokio_postgres::types::ToSql;
use tokio_postgres::Client;

/// Bind parameters the wire protocol allows in one statement.
pub const MAX_BIND_PARAMETERS: usize = 65_535;

/// Rows that fit in one INSERT statement for a table.
pub fn rows_per_statement(table: &TableDefinition) -> usize {
    MAX_BIND_PARAMETERS / (table.columns.len() + 1)
}

/// Build a multi-row `INSERT ... VALUES ($1, ...), (...)` statement.
pub fn build_insert_sql(table: &TableDefinition, row_count: usize) -> String {
    let ddl = PostgreSQLDdl;
    let columns = table.insert_columns();
    let col_count = columns.len();

    let mut placeholders: Vec<String> = Vec::with_capacity(row_count);
    let mut param_idx = 1;
    for _ in 0..row_count {
        let row_placeholders: Vec<String> = (0..col_count)
            .map(|_| {
                let p = format!("${param_idx}");
                param_idx += 1;
                p
            })
            .collect();
        placeholders.push(format!("({})", row_placeholders.join(", ")));
    }

    format!(
        "INSERT INTO {} ({}) VALUES {}",
        ddl.quote_ident(&table.name),
        columns
            .iter()
            .map(|c| ddl.quote_ident(c))
            .collect::<Vec<_>>()
            .join(", "),
        placeholders.join(", ")
    )
}

/// Insert a batch of rows and commit it.
///
/// The batch runs in its own transaction. Batches larger than
/// [`rows_per_statement`] are split into several statements within it.
pub async fn insert_batch(
    client: &mut Client,
    table: &TableDefinition,
    rows: &[FixtureRow],
) -> Result<u64, PostgreSQLLoaderError> {
    if rows.is_empty() {
        return Ok(0);
    }

    let transaction = client.transaction().await?;
    for chunk in rows.chunks(rows_per_statement(table)) {
        let sql = build_insert_sql(table, chunk.len());
        let params = build_params(table, chunk)?;

        // Convert to references for execution
        let param_refs: Vec<&(dyn ToSql + Sync)> = params
            .iter()
            .map(|p| p.as_ref() as &(dyn ToSql + Sync))
            .collect();

        transaction.execute(&sql, &param_refs).await?;
    }
    transaction.commit().await?;

    Ok(rows.len() as u64)
}

/// Flatten rows into boxed parameters, primary key first.
pub fn build_params(
    table: &TableDefinition,
    rows: &[FixtureRow],
) -> Result<Vec<Box<dyn ToSql + Sync + Send>>, PostgreSQLLoaderError> {
    let mut params: Vec<Box<dyn ToSql + Sync + Send>> =
        Vec::with_capacity(rows.len() * (table.columns.len() + 1));

    for row in rows {
        if row.values.len() != table.columns.len() {
            return Err(PostgreSQLLoaderError::RowWidth {
                table: table.name.clone(),
                id: row.id,
                expected: table.columns.len(),
                actual: row.values.len(),
            });
        }

        params.push(Box::new(row.id));
        for (column, value) in table.columns.iter().zip(&row.values) {
            let param = to_sql_param(value, &column.column_type).ok_or_else(|| {
                PostgreSQLLoaderError::ValueType {
                    table: table.name.clone(),
                    column: column.name.clone(),
                }
            })?;
            params.push(param);
        }
    }

    Ok(params)
}

/// Convert a value to a boxed `ToSql` for its column type.
///
/// NULL is bound with the column's Rust type so the server-side type check
/// passes. Returns `None` when the value does not belong in the column.
fn to_sql_param(
    value: &FixtureValue,
    column_type: &ColumnType,
) -> Option<Box<dyn ToSql + Sync + Send>> {
    let param: Box<dyn ToSql + Sync + Send> = match (value, column_type) {
        (FixtureValue::Null, ColumnType::Bool) => Box::new(None::<bool>),
        (FixtureValue::Null, ColumnType::Int32) => Box::new(None::<i32>),
        (FixtureValue::Null, ColumnType::Money) => Box::new(None::<Decimal>),
        (FixtureValue::Null, ColumnType::VarChar { .. } | ColumnType::Text) => {
            Box::new(None::<String>)
        }
        (FixtureValue::Null, ColumnType::LocalDateTime) => Box::new(None::<NaiveDateTime>),
        (FixtureValue::Bool(b), ColumnType::Bool) => Box::new(*b),
        (FixtureValue::Int32(i), ColumnType::Int32) => Box::new(*i),
        (FixtureValue::Money(d), ColumnType::Money) => Box::new(*d),
        (FixtureValue::String(s), ColumnType::VarChar { .. } | ColumnType::Text) => {
            Box::new(s.clone())
        }
        (FixtureValue::DateTime(dt), ColumnType::LocalDateTime) => Box::new(*dt),
        _ => return None,
    };
    Some(param)
}
