//! PostgreSQL DDL generation from [`ColumnType`].

use fixture_core::{ColumnType, TableDefinition, ToDdl};

/// PostgreSQL DDL generator.
pub struct PostgreSQLDdl;

impl ToDdl for PostgreSQLDdl {
    fn to_ddl(&self, column_type: &ColumnType) -> String {
        match column_type {
            ColumnType::Bool => "BOOLEAN".to_string(),
            ColumnType::Int32 => "INTEGER".to_string(),
            // MONEY maps to an exact numeric with four decimal places
            ColumnType::Money => format!(
                "NUMERIC({},{})",
                ColumnType::MONEY_PRECISION,
                ColumnType::MONEY_SCALE
            ),
            ColumnType::VarChar { length } => format!("VARCHAR({length})"),
            ColumnType::Text => "TEXT".to_string(),
            ColumnType::LocalDateTime => "TIMESTAMP".to_string(),
        }
    }

    fn quote_ident(&self, ident: &str) -> String {
        format!("\"{}\"", ident.replace('"', "\"\""))
    }
}

/// Generate CREATE TABLE statement for a fixture table.
pub fn generate_create_table(table: &TableDefinition) -> String {
    PostgreSQLDdl.to_create_table_with_pk(&table.name, &table.primary_key, &table.ddl_columns())
}

/// Generate DROP TABLE statement.
pub fn generate_drop_table(table: &TableDefinition) -> String {
    PostgreSQLDdl.to_drop_table(&table.name)
}
