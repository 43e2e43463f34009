//! Wiring from configuration to a ready repository.

use crate::dao::{MySqlOfficerDaoImpl, OfficerDao, SqliteOfficerDaoImpl};
use crate::{DatabasePool, OfficerRepository, OfficerRepositoryImpl};
use starbase_config::DatabaseConfig;
use starbase_core::StarbaseResult;
use std::sync::Arc;
use tracing::info;

/// A connected pool together with the repository built on it.
#[derive(Clone)]
pub struct OfficerStore {
    pool: Arc<DatabasePool>,
    repository: Arc<dyn OfficerRepository>,
}

impl OfficerStore {
    /// Returns the pool handle.
    #[must_use]
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Returns the repository.
    #[must_use]
    pub fn repository(&self) -> Arc<dyn OfficerRepository> {
        Arc::clone(&self.repository)
    }

    /// Releases the pool. Repository calls fail afterwards.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl std::fmt::Debug for OfficerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OfficerStore")
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

/// Picks the DAO matching the pool's backend.
#[must_use]
pub fn officer_dao_for(pool: &DatabasePool) -> Arc<dyn OfficerDao> {
    match pool {
        DatabasePool::Sqlite(pool) => Arc::new(SqliteOfficerDaoImpl::new(pool.clone())),
        DatabasePool::MySql(pool) => Arc::new(MySqlOfficerDaoImpl::new(pool.clone())),
    }
}

/// Connects, applies migrations when `config.run_migrations` is set, and
/// builds the repository.
pub async fn build_officer_repository(config: &DatabaseConfig) -> StarbaseResult<OfficerStore> {
    let pool = DatabasePool::connect(config).await?;
    if config.run_migrations {
        pool.run_migrations().await?;
    }

    let repository: Arc<dyn OfficerRepository> =
        Arc::new(OfficerRepositoryImpl::new(officer_dao_for(&pool)));
    info!("Officer repository ready on {}", pool.backend());

    Ok(OfficerStore {
        pool: Arc::new(pool),
        repository,
    })
}
