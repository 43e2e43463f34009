//! Database connection pool management.

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use starbase_config::{DatabaseBackend, DatabaseConfig};
use starbase_core::{HealthCheck, HealthStatus, StarbaseError, StarbaseResult};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Pool handle for the configured backend.
///
/// Cloning is cheap and shares the underlying connections. The pool is
/// acquired with [`DatabasePool::connect`] and released with
/// [`DatabasePool::close`]; nothing in this crate holds one globally.
#[derive(Clone)]
pub enum DatabasePool {
    /// SQLite pool.
    Sqlite(SqlitePool),
    /// MySQL pool.
    MySql(MySqlPool),
}

impl DatabasePool {
    /// Connects to the database named by `config.url`.
    pub async fn connect(config: &DatabaseConfig) -> StarbaseResult<Self> {
        let backend = config.backend().ok_or_else(|| {
            StarbaseError::Configuration(format!(
                "Unsupported database URL scheme: {}",
                config.url
            ))
        })?;

        info!("Connecting to {} database...", backend);
        let pool = match backend {
            DatabaseBackend::Sqlite => Self::Sqlite(Self::connect_sqlite(config).await?),
            DatabaseBackend::MySql => Self::MySql(Self::connect_mysql(config).await?),
        };
        info!("{} connection pool established", backend);

        Ok(pool)
    }

    async fn connect_sqlite(config: &DatabaseConfig) -> StarbaseResult<SqlitePool> {
        let mut options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .pragma("case_sensitive_like", "ON");
        if !config.log_queries {
            options = options.disable_statement_logging();
        }

        let mut pool_options = SqlitePoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()));

        // An in-memory database lives and dies with its one connection.
        if config.is_in_memory() {
            pool_options = pool_options
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }

        pool_options.connect_with(options).await.map_err(|e| {
            warn!("Failed to connect to database: {}", e);
            StarbaseError::Database(format!("Failed to connect: {}", e))
        })
    }

    async fn connect_mysql(config: &DatabaseConfig) -> StarbaseResult<MySqlPool> {
        let mut options = MySqlConnectOptions::from_str(&config.url)?;
        if !config.log_queries {
            options = options.disable_statement_logging();
        }

        MySqlPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                StarbaseError::Database(format!("Failed to connect: {}", e))
            })
    }

    /// Returns the backend this pool talks to.
    #[must_use]
    pub const fn backend(&self) -> DatabaseBackend {
        match self {
            Self::Sqlite(_) => DatabaseBackend::Sqlite,
            Self::MySql(_) => DatabaseBackend::MySql,
        }
    }

    /// Returns the SQLite pool, if that is the backend.
    #[must_use]
    pub const fn as_sqlite(&self) -> Option<&SqlitePool> {
        match self {
            Self::Sqlite(pool) => Some(pool),
            Self::MySql(_) => None,
        }
    }

    /// Returns the MySQL pool, if that is the backend.
    #[must_use]
    pub const fn as_mysql(&self) -> Option<&MySqlPool> {
        match self {
            Self::MySql(pool) => Some(pool),
            Self::Sqlite(_) => None,
        }
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> StarbaseResult<()> {
        let probe = match self {
            Self::Sqlite(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
            Self::MySql(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
        };
        probe.map_err(|e| StarbaseError::Database(format!("Health check failed: {}", e)))
    }

    /// Applies the embedded schema for this backend.
    pub async fn run_migrations(&self) -> StarbaseResult<()> {
        info!("Running {} database migrations...", self.backend());
        let applied = match self {
            Self::Sqlite(pool) => sqlx::migrate!("../../migrations/sqlite").run(pool).await,
            Self::MySql(pool) => sqlx::migrate!("../../migrations/mysql").run(pool).await,
        };
        applied.map_err(|e| StarbaseError::Database(format!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Closes the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        match self {
            Self::Sqlite(pool) => pool.close().await,
            Self::MySql(pool) => pool.close().await,
        }
        info!("Database connection pool closed");
    }

    /// Returns true once [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match self {
            Self::Sqlite(pool) => pool.is_closed(),
            Self::MySql(pool) => pool.is_closed(),
        }
    }
}

#[async_trait]
impl HealthCheck for DatabasePool {
    fn name(&self) -> &str {
        "database"
    }

    async fn check(&self) -> HealthStatus {
        match self.health_check().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        }
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (size, num_idle) = match self {
            Self::Sqlite(pool) => (pool.size(), pool.num_idle()),
            Self::MySql(pool) => (pool.size(), pool.num_idle()),
        };
        f.debug_struct("DatabasePool")
            .field("backend", &self.backend())
            .field("size", &size)
            .field("num_idle", &num_idle)
            .finish()
    }
}
