//! MySQL implementation of [`FixtureLoader`].

use crate::ddl::{generate_create_table, generate_drop_table, MySQLDdl};
use crate::error::MySQLLoaderError;
use crate::insert::insert_batch;
use async_trait::async_trait;
use fixture_core::{FixtureRow, TableDefinition, ToDdl};
use fixture_populate::FixtureLoader;
use mysql_async::{prelude::*, Conn, Opts, Pool};
use tracing::{debug, info};

/// Loads fixture tables over a single MySQL session.
pub struct MySQLLoader {
    pool: Pool,
    conn: Conn,
}

impl MySQLLoader {
    /// Open a session and check it with `SELECT 1`.
    pub async fn connect(opts: Opts) -> Result<Self, MySQLLoaderError> {
        info!(
            "Connecting to MySQL: {}:{}/{}",
            opts.ip_or_hostname(),
            opts.tcp_port(),
            opts.db_name().unwrap_or_default()
        );
        let pool = Pool::new(opts);
        let mut conn = pool.get_conn().await?;

        // Test connection
        let _: Option<i32> = conn.query_first("SELECT 1").await?;

        Ok(Self { pool, conn })
    }

    /// Drop the table if it exists.
    pub async fn drop_table(&mut self, table: &TableDefinition) -> Result<(), MySQLLoaderError> {
        info!("Dropping table: {}", table.name);
        self.conn.query_drop(generate_drop_table(table)).await?;
        Ok(())
    }

    /// Create the table.
    pub async fn create_table(&mut self, table: &TableDefinition) -> Result<(), MySQLLoaderError> {
        let sql = generate_create_table(table);
        info!("Creating table: {}", table.name);
        debug!("DDL: {}", sql);
        self.conn.query_drop(sql).await?;
        Ok(())
    }

    /// Release the session and close the pool.
    pub async fn disconnect(self) -> Result<(), MySQLLoaderError> {
        drop(self.conn);
        self.pool.disconnect().await?;
        Ok(())
    }
}

#[async_trait]
impl FixtureLoader for MySQLLoader {
    type Error = MySQLLoaderError;

    fn backend(&self) -> &'static str {
        "mysql"
    }

    async fn recreate_table(&mut self, table: &TableDefinition) -> Result<(), Self::Error> {
        self.drop_table(table).await?;
        self.create_table(table).await?;
        Ok(())
    }

    async fn insert_batch(
        &mut self,
        table: &TableDefinition,
        rows: &[FixtureRow],
    ) -> Result<u64, Self::Error> {
        insert_batch(&mut self.conn, table, rows).await
    }

    async fn row_count(&mut self, table: &TableDefinition) -> Result<u64, Self::Error> {
        let sql = format!("SELECT COUNT(*) FROM {}", MySQLDdl.quote_ident(&table.name));
        let count: Option<u64> = self.conn.query_first(sql).await?;
        Ok(count.unwrap_or(0))
    }
}
