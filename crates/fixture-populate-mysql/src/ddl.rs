//! MySQL DDL generation from [`ColumnType`].

use fixture_core::{ColumnType, TableDefinition, ToDdl};

/// MySQL DDL generator.
pub struct MySQLDdl;

impl ToDdl for MySQLDdl {
    fn to_ddl(&self, column_type: &ColumnType) -> String {
        match column_type {
            // Boolean - MySQL uses TINYINT(1)
            ColumnType::Bool => "TINYINT(1)".to_string(),
            ColumnType::Int32 => "INT".to_string(),
            ColumnType::Money => format!(
                "DECIMAL({},{})",
                ColumnType::MONEY_PRECISION,
                ColumnType::MONEY_SCALE
            ),
            ColumnType::VarChar { length } => format!("VARCHAR({length})"),
            ColumnType::Text => "TEXT".to_string(),
            ColumnType::LocalDateTime => "DATETIME".to_string(),
        }
    }

    fn quote_ident(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }
}

/// Generate CREATE TABLE statement for a fixture table.
pub fn generate_create_table(table: &TableDefinition) -> String {
    MySQLDdl.to_create_table_with_pk(&table.name, &table.primary_key, &table.ddl_columns())
}

/// Generate DROP TABLE statement.
pub fn generate_drop_table(table: &TableDefinition) -> String {
    MySQLDdl.to_drop_table(&table.name)
}
