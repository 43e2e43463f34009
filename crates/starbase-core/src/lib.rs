//! # Starbase Core
//!
//! Core types shared by the Starbase crates: the error taxonomy, the
//! `Officer` entity and its value objects, pagination, validation helpers
//! and tracing setup.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku's marker so component traits share one bound
pub use shaku::Interface;
