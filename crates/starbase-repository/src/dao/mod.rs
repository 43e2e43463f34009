//! DAO (Data Access Object) layer.
//!
//! DAOs provide low-level, single-source data access abstractions.
//! Each DAO implementation maps to one data source (SQLite, MySQL, memory).
//!
//! Hierarchy:
//! ```text
//! Caller → Repository (interface + impl) → DAO (interface + impl) → DB
//! ```

pub mod r#impl;
pub mod officer_dao;
mod row;

pub use officer_dao::OfficerDao;
pub use r#impl::{InMemoryOfficerDaoImpl, MySqlOfficerDaoImpl, SqliteOfficerDaoImpl};
