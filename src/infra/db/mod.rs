//! PostgreSQL connection and schema bootstrap.

use sea_orm::{
    ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, EntityName, EntityTrait,
    Schema,
};

use crate::config::Config;
use crate::infra::repositories::entities::{PhoneEntity, UserEntity};

/// Shared handle to the connection pool.
#[derive(Clone)]
pub struct Database {
    pool: DatabaseConnection,
}

impl Database {
    /// Open the pool and create any missing tables.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let db = Self::from_connection(SeaDatabase::connect(&config.database_url).await?);
        db.ensure_schema().await?;
        tracing::info!("Database ready");
        Ok(db)
    }

    pub fn from_connection(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Cloned pool handle for repositories
    pub fn get_connection(&self) -> DatabaseConnection {
        self.pool.clone()
    }

    /// Create `users` then `phones` from the entity definitions, skipping
    /// tables and indexes that already exist. The email unique constraint
    /// and the phone foreign key come from the entities.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        self.create_if_missing(UserEntity).await?;
        self.create_if_missing(PhoneEntity).await
    }

    async fn create_if_missing<E: EntityTrait>(&self, entity: E) -> Result<(), DbErr> {
        let backend = self.pool.get_database_backend();
        let schema = Schema::new(backend);

        let mut table = schema.create_table_from_entity(entity);
        self.pool.execute(backend.build(table.if_not_exists())).await?;

        for mut index in schema.create_index_from_entity(entity) {
            self.pool.execute(backend.build(index.if_not_exists())).await?;
        }
        tracing::debug!(table = entity.table_name(), "Table ensured");
        Ok(())
    }

    /// Round-trip to the server, used by the health endpoint.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.pool.ping().await
    }
}
