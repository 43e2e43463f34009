//! Result type aliases for Starbase.

use crate::StarbaseError;

/// A specialized `Result` type for Starbase operations.
pub type StarbaseResult<T> = Result<T, StarbaseError>;
