//! Repository layer implementations.
//!
//! Trait definitions live in the parent module (`traits.rs`).
//! This module contains the concrete struct implementing them.

pub mod officer_repository_impl;

pub use officer_repository_impl::OfficerRepositoryImpl;
