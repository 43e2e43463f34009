//! # Starbase Config
//!
//! Layered configuration for Starbase: TOML files, `.env`, and
//! `STARBASE__*` environment variables, validated before use.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
