//! The cart store: single source of truth for the user's selected items.
//!
//! # Architecture
//!
//! - One [`CartStore`] instance is constructed at startup and injected
//!   through application state; route handlers never own cart state
//! - All mutations go through the store, which recomputes derived
//!   aggregates and persists the whole state after every change
//! - Persistence is a single serialized record under one fixed location,
//!   overwritten wholesale (no incremental diffing), abstracted behind
//!   [`CartStorage`]
//! - Storage failures never reach the user: the store logs a warning and
//!   degrades to in-memory-only behavior for the session

mod storage;
mod store;

pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};
pub use store::{CartSnapshot, CartStore};
