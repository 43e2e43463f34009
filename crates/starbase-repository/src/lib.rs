//! # Starbase Repository
//!
//! Three-layer data access hierarchy for officers:
//!
//! ```text
//! Caller
//!   ↓  Arc<dyn OfficerRepository>  (domain interface)
//! OfficerRepositoryImpl            (validation, insert vs update)
//!   ↓  Arc<dyn OfficerDao>         (DAO interface)
//! SqliteOfficerDaoImpl | MySqlOfficerDaoImpl | InMemoryOfficerDaoImpl
//!   ↓
//! SQLite / MySQL / process memory
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   traits.rs                       ← OfficerRepository trait
//!   pool.rs                         ← DatabasePool (connect, migrate, close)
//!   bootstrap.rs                    ← DatabaseConfig → OfficerStore
//!   impl/
//!     officer_repository_impl.rs    ← OfficerRepositoryImpl
//!   dao/
//!     officer_dao.rs                ← OfficerDao trait
//!     impl/
//!       sqlite.rs | mysql.rs | memory.rs
//! ```

pub mod bootstrap;
pub mod dao;
pub mod pool;
pub mod traits;
pub mod r#impl;

pub use bootstrap::{build_officer_repository, officer_dao_for, OfficerStore};
pub use dao::{InMemoryOfficerDaoImpl, MySqlOfficerDaoImpl, OfficerDao, SqliteOfficerDaoImpl};
pub use pool::*;
pub use r#impl::OfficerRepositoryImpl;
pub use traits::*;
