//! Row mapping shared by the SQL DAOs.

use sqlx::FromRow;
use starbase_core::{Officer, OfficerId, Rank, StarbaseError};

/// Database row representation of an officer.
#[derive(Debug, FromRow)]
pub(crate) struct OfficerRow {
    id: i64,
    rank: String,
    first: String,
    last: String,
}

impl TryFrom<OfficerRow> for Officer {
    type Error = StarbaseError;

    fn try_from(row: OfficerRow) -> Result<Self, Self::Error> {
        let rank: Rank = row.rank.parse()?;
        Ok(Officer::new(rank, row.first, row.last).with_id(OfficerId::new(row.id)))
    }
}

/// Converts fetched rows, failing on the first unmappable one.
pub(crate) fn into_officers(rows: Vec<OfficerRow>) -> Result<Vec<Officer>, StarbaseError> {
    rows.into_iter().map(Officer::try_from).collect()
}

/// Converts a `COUNT(*)` result, which the drivers decode as `i64`.
pub(crate) fn into_count(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}

/// Converts a `LIMIT`/`OFFSET` value for binding, saturating at `i64::MAX`.
pub(crate) fn bind_count(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
