//! SQLite officer DAO.
//!
//! `rank` is quoted throughout; the pool enables `case_sensitive_like` so
//! `LIKE` compares exactly as on the other backends.

use crate::dao::row::{bind_count, into_count, into_officers, OfficerRow};
use crate::dao::OfficerDao;
use async_trait::async_trait;
use sqlx::SqlitePool;
use starbase_core::{LikePattern, Officer, OfficerId, Page, PageRequest, Rank, StarbaseResult};
use tracing::debug;

const SELECT_COLUMNS: &str = r#"SELECT "id", "rank", "first", "last" FROM officers"#;

/// SQLite implementation of [`OfficerDao`].
#[derive(Clone)]
pub struct SqliteOfficerDaoImpl {
    pool: SqlitePool,
}

impl SqliteOfficerDaoImpl {
    /// Creates a new DAO over the given pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OfficerDao for SqliteOfficerDaoImpl {
    async fn find_by_id(&self, id: OfficerId) -> StarbaseResult<Option<Officer>> {
        let sql = format!(r#"{} WHERE "id" = ?"#, SELECT_COLUMNS);
        let row = sqlx::query_as::<_, OfficerRow>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await?;
        row.map(Officer::try_from).transpose()
    }

    async fn find_all(&self) -> StarbaseResult<Vec<Officer>> {
        let sql = format!(r#"{} ORDER BY "id""#, SELECT_COLUMNS);
        let rows = sqlx::query_as::<_, OfficerRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        into_officers(rows)
    }

    async fn find_page(&self, page: PageRequest) -> StarbaseResult<Page<Officer>> {
        let sql = format!(r#"{} ORDER BY "id" LIMIT ? OFFSET ?"#, SELECT_COLUMNS);
        let rows = sqlx::query_as::<_, OfficerRow>(&sql)
            .bind(bind_count(page.limit()))
            .bind(bind_count(page.offset()))
            .fetch_all(&self.pool)
            .await?;
        let total = self.count().await?;
        Ok(Page::new(into_officers(rows)?, page, total))
    }

    async fn count(&self) -> StarbaseResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM officers")
            .fetch_one(&self.pool)
            .await?;
        Ok(into_count(count))
    }

    async fn exists_by_id(&self, id: OfficerId) -> StarbaseResult<bool> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM officers WHERE "id" = ?"#)
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn insert(&self, officer: &Officer) -> StarbaseResult<OfficerId> {
        let result =
            sqlx::query(r#"INSERT INTO officers ("rank", "first", "last") VALUES (?, ?, ?)"#)
                .bind(officer.rank.as_str())
                .bind(&officer.first)
                .bind(&officer.last)
                .execute(&self.pool)
                .await?;
        let id = OfficerId::new(result.last_insert_rowid());
        debug!("SQLite: inserted officer {}", id);
        Ok(id)
    }

    async fn update(&self, id: OfficerId, officer: &Officer) -> StarbaseResult<bool> {
        let result = sqlx::query(
            r#"UPDATE officers SET "rank" = ?, "first" = ?, "last" = ? WHERE "id" = ?"#,
        )
        .bind(officer.rank.as_str())
        .bind(&officer.first)
        .bind(&officer.last)
        .bind(id.into_inner())
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: OfficerId) -> StarbaseResult<bool> {
        let result = sqlx::query(r#"DELETE FROM officers WHERE "id" = ?"#)
            .bind(id.into_inner())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> StarbaseResult<u64> {
        let result = sqlx::query("DELETE FROM officers")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn find_by_last(&self, last: &str) -> StarbaseResult<Vec<Officer>> {
        let sql = format!(r#"{} WHERE "last" = ? ORDER BY "id""#, SELECT_COLUMNS);
        let rows = sqlx::query_as::<_, OfficerRow>(&sql)
            .bind(last)
            .fetch_all(&self.pool)
            .await?;
        into_officers(rows)
    }

    async fn find_by_rank(&self, rank: Rank) -> StarbaseResult<Vec<Officer>> {
        let sql = format!(r#"{} WHERE "rank" = ? ORDER BY "id""#, SELECT_COLUMNS);
        let rows = sqlx::query_as::<_, OfficerRow>(&sql)
            .bind(rank.as_str())
            .fetch_all(&self.pool)
            .await?;
        into_officers(rows)
    }

    async fn find_by_rank_and_last_like(
        &self,
        rank: Rank,
        pattern: &LikePattern,
    ) -> StarbaseResult<Vec<Officer>> {
        // SQLite has no default escape character.
        let sql = format!(
            r#"{} WHERE "rank" = ? AND "last" LIKE ? ESCAPE '\' ORDER BY "id""#,
            SELECT_COLUMNS
        );
        let rows = sqlx::query_as::<_, OfficerRow>(&sql)
            .bind(rank.as_str())
            .bind(pattern.as_str())
            .fetch_all(&self.pool)
            .await?;
        into_officers(rows)
    }
}

impl std::fmt::Debug for SqliteOfficerDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteOfficerDaoImpl").finish_non_exhaustive()
    }
}
