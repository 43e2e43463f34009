//! DAO implementations.
//!
//! The trait definition lives in the parent `dao/` module (`officer_dao.rs`).
//! Implementations are organized by technology.

pub mod memory;
pub mod mysql;
pub mod sqlite;

pub use memory::InMemoryOfficerDaoImpl;
pub use mysql::MySqlOfficerDaoImpl;
pub use sqlite::SqliteOfficerDaoImpl;
