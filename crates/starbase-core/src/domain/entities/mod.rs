//! Domain entities.

mod officer;

pub use officer::Officer;
