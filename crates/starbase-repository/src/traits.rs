//! Repository trait definitions.

use async_trait::async_trait;
use starbase_core::{Interface, Officer, OfficerId, Page, PageRequest, Rank, StarbaseResult};

/// Officer repository trait.
#[async_trait]
pub trait OfficerRepository: Interface + Send + Sync {
    /// Inserts an unsaved officer or updates a saved one.
    ///
    /// Returns the stored officer, carrying its assigned id after an insert.
    async fn save(&self, officer: &Officer) -> StarbaseResult<Officer>;

    /// Finds an officer by ID.
    async fn find_by_id(&self, id: OfficerId) -> StarbaseResult<Option<Officer>>;

    /// Lists every officer, ordered by id.
    async fn find_all(&self) -> StarbaseResult<Vec<Officer>>;

    /// Lists one page of officers, ordered by id.
    async fn find_page(&self, page: PageRequest) -> StarbaseResult<Page<Officer>>;

    /// Counts all officers.
    async fn count(&self) -> StarbaseResult<u64>;

    /// Checks if an officer with this ID exists.
    async fn exists_by_id(&self, id: OfficerId) -> StarbaseResult<bool>;

    /// Deletes a saved officer.
    async fn delete(&self, officer: &Officer) -> StarbaseResult<()>;

    /// Deletes an officer by ID.
    async fn delete_by_id(&self, id: OfficerId) -> StarbaseResult<()>;

    /// Deletes every officer. Returns the number removed.
    async fn delete_all(&self) -> StarbaseResult<u64>;

    /// Finds officers whose surname equals `last` exactly.
    async fn find_by_last(&self, last: &str) -> StarbaseResult<Vec<Officer>>;

    /// Finds officers holding `rank`.
    async fn find_by_rank(&self, rank: Rank) -> StarbaseResult<Vec<Officer>>;

    /// Finds officers holding `rank` whose surname matches a `LIKE` pattern.
    async fn find_all_by_rank_and_last_like(
        &self,
        rank: Rank,
        pattern: &str,
    ) -> StarbaseResult<Vec<Officer>>;
}
