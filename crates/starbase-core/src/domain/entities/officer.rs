//! Officer entity.

use crate::{rules, Entity, OfficerId, Rank, StarbaseError, StarbaseResult, ValidateExt};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// A commissioned officer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Officer {
    /// Store-assigned key; `None` until the first save.
    pub id: Option<OfficerId>,

    /// Officer's rank.
    pub rank: Rank,

    /// Given name.
    #[validate(length(min = 1, max = 64))]
    pub first: String,

    /// Surname.
    #[validate(length(min = 1, max = 64))]
    pub last: String,
}

impl Officer {
    /// Creates an officer that has not been persisted yet.
    #[must_use]
    pub fn new(rank: Rank, first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            id: None,
            rank,
            first: first.into(),
            last: last.into(),
        }
    }

    /// Returns a copy carrying the given key.
    #[must_use]
    pub fn with_id(mut self, id: OfficerId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the key or fails with `InvalidArgument` for an unsaved officer.
    pub fn require_id(&self) -> StarbaseResult<OfficerId> {
        self.id.ok_or_else(|| {
            StarbaseError::invalid_argument(format!(
                "Officer {} has not been persisted and has no id",
                self.full_name()
            ))
        })
    }

    /// Checks the field constraints enforced before any write.
    pub fn check_constraints(&self) -> StarbaseResult<()> {
        self.validate_constraints()?;
        for (field, value) in [("first", &self.first), ("last", &self.last)] {
            rules::not_blank(value).map_err(|_| {
                StarbaseError::ConstraintViolation(format!("{}: must not be blank", field))
            })?;
        }
        Ok(())
    }

    /// Returns "first last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    /// Promotes (or demotes) the officer.
    pub fn change_rank(&mut self, rank: Rank) {
        self.rank = rank;
    }
}

impl Entity<OfficerId> for Officer {
    fn id(&self) -> Option<OfficerId> {
        self.id
    }
}

/// Persisted officers are equal when their keys are; unsaved officers
/// compare by value; a persisted officer never equals an unsaved one.
impl PartialEq for Officer {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => {
                self.rank == other.rank && self.first == other.first && self.last == other.last
            }
            _ => false,
        }
    }
}

impl Eq for Officer {}

impl fmt::Display for Officer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{} {} (#{})", self.rank, self.full_name(), id),
            None => write!(f, "{} {} (unsaved)", self.rank, self.full_name()),
        }
    }
}
