use crate::config::Config;
use crate::error::Result;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::sync::Once;
use tracing::{error, info};

static INSTALL_DRIVERS: Once = Once::new();

/// Database connection pool wrapper. The `any` driver keeps Postgres for
/// deployment and SQLite for local development and tests behind one URL.
#[derive(Clone)]
pub struct Database {
    pub pool: AnyPool,
    config: Config,
}

impl Database {
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Initializing database connection to {}", config.database_url);

        INSTALL_DRIVERS.call_once(sqlx::any::install_default_drivers);

        let pool = AnyPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(&config.database_url)
            .await?;

        Ok(Self {
            pool,
            config: config.clone(),
        })
    }

    /// Run a trivial query to confirm the pool is usable.
    pub async fn verify_connection(&self) -> Result<()> {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => {
                info!("Database connection verified successfully");
                Ok(())
            }
            Err(e) => {
                error!("Failed to verify database connection: {}", e);
                Err(e.into())
            }
        }
    }

    /// Create the bookmarks table if it does not exist. Only the surrogate
    /// key column differs between the supported backends.
    pub async fn run_migrations(&self) -> Result<()> {
        let id_column = if self.config.database_url.starts_with("sqlite") {
            "INTEGER PRIMARY KEY AUTOINCREMENT"
        } else {
            "BIGSERIAL PRIMARY KEY"
        };

        let statement = format!(
            "CREATE TABLE IF NOT EXISTS bookmarks (
                id {},
                title TEXT NOT NULL,
                url TEXT NOT NULL,
                description TEXT,
                rating BIGINT NOT NULL
            )",
            id_column
        );

        sqlx::query(&statement).execute(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }
}
