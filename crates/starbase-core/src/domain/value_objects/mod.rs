//! Domain value objects.

mod like_pattern;
mod rank;

pub use like_pattern::{LikePattern, LIKE_ESCAPE};
pub use rank::Rank;
