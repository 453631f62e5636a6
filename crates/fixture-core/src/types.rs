//! Column types for the fixture tables.
//!
//! `ColumnType` is the small, database-neutral type universe the fixture
//! needs. Each loader backend maps it to native DDL through [`ToDdl`].

/// Database-neutral column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Boolean flag (SQL Server `BIT`)
    Bool,

    /// 32-bit signed integer
    Int32,

    /// Currency amount with four decimal places (SQL Server `MONEY`)
    Money,

    /// Variable-length character string with max length
    VarChar {
        /// Maximum length in characters
        length: u16,
    },

    /// Unlimited text
    Text,

    /// Timestamp without timezone, seconds precision
    LocalDateTime,
}

impl ColumnType {
    /// Precision used when a backend maps `Money` to an exact numeric type.
    pub const MONEY_PRECISION: u8 = 19;

    /// Scale used when a backend maps `Money` to an exact numeric type.
    pub const MONEY_SCALE: u32 = 4;

    /// Maximum length of string values, if bounded.
    pub fn max_length(&self) -> Option<usize> {
        match self {
            Self::VarChar { length } => Some(*length as usize),
            _ => None,
        }
    }
}

/// Trait for generating DDL from [`ColumnType`].
pub trait ToDdl {
    /// Convert a column type to the backend's DDL type string.
    fn to_ddl(&self, column_type: &ColumnType) -> String;

    /// Quote an identifier for the backend.
    fn quote_ident(&self, ident: &str) -> String;

    /// DDL for an integer primary key column.
    fn primary_key_ddl(&self) -> String {
        self.to_ddl(&ColumnType::Int32)
    }

    /// Generate a complete CREATE TABLE statement with a primary key.
    fn to_create_table_with_pk(
        &self,
        table_name: &str,
        pk_column: &str,
        columns: &[(String, ColumnType, bool)],
    ) -> String {
        let mut column_defs = vec![format!(
            "  {} {} NOT NULL",
            self.quote_ident(pk_column),
            self.primary_key_ddl()
        )];
        column_defs.extend(columns.iter().map(|(name, column_type, nullable)| {
            let null_clause = if *nullable { "NULL" } else { "NOT NULL" };
            format!(
                "  {} {} {}",
                self.quote_ident(name),
                self.to_ddl(column_type),
                null_clause
            )
        }));

        format!(
            "CREATE TABLE {} (\n{},\n  PRIMARY KEY ({})\n)",
            self.quote_ident(table_name),
            column_defs.join(",\n"),
            self.quote_ident(pk_column)
        )
    }

    /// Generate a DROP TABLE statement.
    fn to_drop_table(&self, table_name: &str) -> String {
        format!("DROP TABLE IF EXISTS {}", self.quote_ident(table_name))
    }
}
