//! Core types for EliteStore.
//!
//! This module provides the typed view of the remote catalog's data.

pub mod id;
pub mod product;

pub use id::ProductId;
pub use product::{Product, Rating};
