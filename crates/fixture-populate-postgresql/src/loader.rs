//! PostgreSQL implementation of [`FixtureLoader`].

use crate::ddl::{generate_create_table, generate_drop_table, PostgreSQLDdl};
use crate::error::PostgreSQLLoaderError;
use crate::insert::insert_batch;
use async_trait::async_trait;
use fixture_core::{FixtureRow, TableDefinition, ToDdl};
use fixture_populate::{mask_connection_password, FixtureLoader};
use tokio_postgres::{Client, NoTls};
use tracing::{debug, info};

/// Loads fixture tables over a single PostgreSQL session.
pub struct PostgreSQLLoader {
    client: Client,
}

impl PostgreSQLLoader {
    /// Connect and check the session with `SELECT 1`.
    ///
    /// # Arguments
    ///
    /// * `connection_string` - libpq key/value string or `postgresql://` URL
    ///
    /// # Example
    ///
    /// ```ignore
    /// let loader = PostgreSQLLoader::connect(
    ///     "host=localhost user=postgres password=postgres dbname=TransactionDB_UAT",
    /// ).await?;
    /// ```
    pub async fn connect(connection_string: &str) -> Result<Self, PostgreSQLLoaderError> {
        info!(
            "Connecting to PostgreSQL: {}",
            mask_connection_password(connection_string)
        );
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls).await?;

        // Spawn the connection task
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {}", e);
            }
        });

        // Test connection
        client.simple_query("SELECT 1").await?;

        Ok(Self::with_client(client))
    }

    /// Create a loader from an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Drop the table if it exists.
    pub async fn drop_table(&self, table: &TableDefinition) -> Result<(), PostgreSQLLoaderError> {
        info!("Dropping table: {}", table.name);
        self.client.execute(&generate_drop_table(table), &[]).await?;
        Ok(())
    }

    /// Create the table.
    pub async fn create_table(&self, table: &TableDefinition) -> Result<(), PostgreSQLLoaderError> {
        let sql = generate_create_table(table);
        info!("Creating table: {}", table.name);
        debug!("DDL: {}", sql);
        self.client.execute(&sql, &[]).await?;
        Ok(())
    }
}

#[async_trait]
impl FixtureLoader for PostgreSQLLoader {
    type Error = PostgreSQLLoaderError;

    fn backend(&self) -> &'static str {
        "postgresql"
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
        insert_batch(&mut self.client, table, rows).await
    }

    async fn row_count(&mut self, table: &TableDefinition) -> Result<u64, Self::Error> {
        let sql = format!(
            "SELECT COUNT(*) FROM {}",
            PostgreSQLDdl.quote_ident(&table.name)
        );
        let row = self.client.query_one(&sql, &[]).await?;
        let count: i64 = row.get(0);
        Ok(count as u64)
    }
}
