//! OfficerDao trait: low-level officer data access abstraction.
//!
//! Implementations talk to exactly one data source and trust their input:
//! validation, id bookkeeping and error shaping for missing rows happen in
//! [`OfficerRepositoryImpl`].
//!
//! [`OfficerRepositoryImpl`]: crate::OfficerRepositoryImpl

use async_trait::async_trait;
use starbase_core::{
    Interface, LikePattern, Officer, OfficerId, Page, PageRequest, Rank, StarbaseResult,
};

/// Low-level officer data access object.
///
/// Every list operation returns rows ordered by id ascending.
#[async_trait]
pub trait OfficerDao: Interface + Send + Sync {
    /// Finds an officer by ID.
    async fn find_by_id(&self, id: OfficerId) -> StarbaseResult<Option<Officer>>;

    /// Lists every officer.
    async fn find_all(&self) -> StarbaseResult<Vec<Officer>>;

    /// Lists one page of officers together with the total count.
    async fn find_page(&self, page: PageRequest) -> StarbaseResult<Page<Officer>>;

    /// Counts all officers.
    async fn count(&self) -> StarbaseResult<u64>;

    /// Checks if a row with this ID exists.
    async fn exists_by_id(&self, id: OfficerId) -> StarbaseResult<bool>;

    /// Inserts a new row and returns the assigned ID. The officer's own id is
    /// ignored.
    async fn insert(&self, officer: &Officer) -> StarbaseResult<OfficerId>;

    /// Overwrites the row with `id`. Returns `false` when no such row exists.
    async fn update(&self, id: OfficerId, officer: &Officer) -> StarbaseResult<bool>;

    /// Deletes a row by ID. Returns `true` if deleted.
    async fn delete_by_id(&self, id: OfficerId) -> StarbaseResult<bool>;

    /// Deletes every row. Returns the number removed.
    async fn delete_all(&self) -> StarbaseResult<u64>;

    /// Finds officers by exact surname.
    async fn find_by_last(&self, last: &str) -> StarbaseResult<Vec<Officer>>;

    /// Finds officers by rank.
    async fn find_by_rank(&self, rank: Rank) -> StarbaseResult<Vec<Officer>>;

    /// Finds officers by rank whose surname matches `pattern`.
    async fn find_by_rank_and_last_like(
        &self,
        rank: Rank,
        pattern: &LikePattern,
    ) -> StarbaseResult<Vec<Officer>>;
}
