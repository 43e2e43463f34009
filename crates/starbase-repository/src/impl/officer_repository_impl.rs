//! `OfficerRepositoryImpl`: repository layer implementation.
//!
//! Implements the [`OfficerRepository`] interface on top of an
//! [`OfficerDao`]:
//!
//! ```text
//! Caller
//!   ↓ Arc<dyn OfficerRepository>
//! OfficerRepositoryImpl       ← validates input, decides insert vs update
//!   ↓ Arc<dyn OfficerDao>
//! SqliteOfficerDaoImpl / MySqlOfficerDaoImpl / InMemoryOfficerDaoImpl
//! ```
//!
//! [`OfficerRepository`]: crate::traits::OfficerRepository
//! [`OfficerDao`]: crate::dao::OfficerDao

use crate::{dao::OfficerDao, traits::OfficerRepository};
use async_trait::async_trait;
use starbase_core::{
    LikePattern, Officer, OfficerId, Page, PageRequest, Rank, StarbaseError, StarbaseResult,
};
use std::sync::Arc;
use tracing::debug;

const RESOURCE: &str = "Officer";

/// Repository implementation that orchestrates [`OfficerDao`] access.
///
/// [`OfficerDao`]: crate::dao::OfficerDao
pub struct OfficerRepositoryImpl {
    officer_dao: Arc<dyn OfficerDao>,
}

impl OfficerRepositoryImpl {
    /// Creates a new `OfficerRepositoryImpl` with the given DAO.
    #[must_use]
    pub fn new(officer_dao: Arc<dyn OfficerDao>) -> Self {
        Self { officer_dao }
    }
}

#[async_trait]
impl OfficerRepository for OfficerRepositoryImpl {
    async fn save(&self, officer: &Officer) -> StarbaseResult<Officer> {
        officer.check_constraints()?;

        match officer.id {
            None => {
                debug!("Repository: insert officer {}", officer.full_name());
                let id = self.officer_dao.insert(officer).await?;
                Ok(officer.clone().with_id(id))
            }
            Some(id) => {
                debug!("Repository: update officer {}", id);
                if self.officer_dao.update(id, officer).await? {
                    Ok(officer.clone())
                } else {
                    Err(StarbaseError::not_found(RESOURCE, id))
                }
            }
        }
    }

    async fn find_by_id(&self, id: OfficerId) -> StarbaseResult<Option<Officer>> {
        debug!("Repository: find_by_id {}", id);
        self.officer_dao.find_by_id(id).await
    }

    async fn find_all(&self) -> StarbaseResult<Vec<Officer>> {
        debug!("Repository: find_all");
        self.officer_dao.find_all().await
    }

    async fn find_page(&self, page: PageRequest) -> StarbaseResult<Page<Officer>> {
        debug!("Repository: find_page page={} size={}", page.page, page.size);
        self.officer_dao.find_page(page).await
    }

    async fn count(&self) -> StarbaseResult<u64> {
        self.officer_dao.count().await
    }

    async fn exists_by_id(&self, id: OfficerId) -> StarbaseResult<bool> {
        self.officer_dao.exists_by_id(id).await
    }

    async fn delete(&self, officer: &Officer) -> StarbaseResult<()> {
        let id = officer.require_id()?;
        self.delete_by_id(id).await
    }

    async fn delete_by_id(&self, id: OfficerId) -> StarbaseResult<()> {
        debug!("Repository: delete officer {}", id);
        if self.officer_dao.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(StarbaseError::not_found(RESOURCE, id))
        }
    }

    async fn delete_all(&self) -> StarbaseResult<u64> {
        debug!("Repository: delete_all");
        self.officer_dao.delete_all().await
    }

    async fn find_by_last(&self, last: &str) -> StarbaseResult<Vec<Officer>> {
        debug!("Repository: find_by_last {}", last);
        self.officer_dao.find_by_last(last).await
    }

    async fn find_by_rank(&self, rank: Rank) -> StarbaseResult<Vec<Officer>> {
        debug!("Repository: find_by_rank {}", rank);
        self.officer_dao.find_by_rank(rank).await
    }

    async fn find_all_by_rank_and_last_like(
        &self,
        rank: Rank,
        pattern: &str,
    ) -> StarbaseResult<Vec<Officer>> {
        debug!("Repository: find_all_by_rank_and_last_like {} {}", rank, pattern);
        let pattern = LikePattern::parse(pattern)?;
        self.officer_dao.find_by_rank_and_last_like(rank, &pattern).await
    }
}

impl std::fmt::Debug for OfficerRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OfficerRepositoryImpl").finish_non_exhaustive()
    }
}
