//! Typed ID wrapper for officers.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Store-assigned surrogate key of an officer.
///
/// Values only ever come from the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfficerId(pub i64);

impl OfficerId {
    /// Wraps a raw key.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw key.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for OfficerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OfficerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<OfficerId> for i64 {
    fn from(id: OfficerId) -> Self {
        id.0
    }
}
