//! In-memory officer DAO.

use crate::dao::OfficerDao;
use async_trait::async_trait;
use parking_lot::Mutex;
use starbase_core::{LikePattern, Officer, OfficerId, Page, PageRequest, Rank, StarbaseResult};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<OfficerId, Officer>,
    last_id: i64,
}

impl Table {
    fn select(&self, predicate: impl Fn(&Officer) -> bool) -> Vec<Officer> {
        self.rows.values().filter(|o| predicate(o)).cloned().collect()
    }
}

/// Process-local implementation of [`OfficerDao`].
///
/// Ids come from a counter that only moves forward, so a deleted id is
/// never handed out again. Pattern matching uses [`LikePattern::matches`].
#[derive(Debug, Default)]
pub struct InMemoryOfficerDaoImpl {
    table: Mutex<Table>,
}

impl InMemoryOfficerDaoImpl {
    /// Creates an empty DAO.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OfficerDao for InMemoryOfficerDaoImpl {
    async fn find_by_id(&self, id: OfficerId) -> StarbaseResult<Option<Officer>> {
        Ok(self.table.lock().rows.get(&id).cloned())
    }

    async fn find_all(&self) -> StarbaseResult<Vec<Officer>> {
        Ok(self.table.lock().select(|_| true))
    }

    async fn find_page(&self, page: PageRequest) -> StarbaseResult<Page<Officer>> {
        let table = self.table.lock();
        let content = table
            .rows
            .values()
            .skip(page.offset())
            .take(page.limit())
            .cloned()
            .collect();
        Ok(Page::new(content, page, table.rows.len() as u64))
    }

    async fn count(&self) -> StarbaseResult<u64> {
        Ok(self.table.lock().rows.len() as u64)
    }

    async fn exists_by_id(&self, id: OfficerId) -> StarbaseResult<bool> {
        Ok(self.table.lock().rows.contains_key(&id))
    }

    async fn insert(&self, officer: &Officer) -> StarbaseResult<OfficerId> {
        let mut table = self.table.lock();
        table.last_id += 1;
        let id = OfficerId::new(table.last_id);
        table.rows.insert(id, officer.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, id: OfficerId, officer: &Officer) -> StarbaseResult<bool> {
        let mut table = self.table.lock();
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = officer.clone().with_id(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: OfficerId) -> StarbaseResult<bool> {
        Ok(self.table.lock().rows.remove(&id).is_some())
    }

    async fn delete_all(&self) -> StarbaseResult<u64> {
        let mut table = self.table.lock();
        let removed = table.rows.len() as u64;
        table.rows.clear();
        Ok(removed)
    }

    async fn find_by_last(&self, last: &str) -> StarbaseResult<Vec<Officer>> {
        Ok(self.table.lock().select(|o| o.last == last))
    }

    async fn find_by_rank(&self, rank: Rank) -> StarbaseResult<Vec<Officer>> {
        Ok(self.table.lock().select(|o| o.rank == rank))
    }

    async fn find_by_rank_and_last_like(
        &self,
        rank: Rank,
        pattern: &LikePattern,
    ) -> StarbaseResult<Vec<Officer>> {
        Ok(self
            .table
            .lock()
            .select(|o| o.rank == rank && pattern.matches(&o.last)))
    }
}
