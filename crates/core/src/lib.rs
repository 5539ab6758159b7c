//! EliteStore Core - Shared domain library.
//!
//! This crate provides the domain types and logic shared across EliteStore
//! components:
//! - `storefront` - Public-facing storefront service
//! - `integration-tests` - End-to-end tests against the real router
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no async. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product and rating types matching the catalog wire shape
//! - [`cart`] - Cart state, its four mutations, and derived aggregates
//! - [`totals`] - Order totals arithmetic (shipping, tax)
//! - [`checkout`] - Checkout form fields and per-field validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod totals;
pub mod types;

pub use cart::{CartLine, CartState};
pub use checkout::{CheckoutForm, PaymentMethod};
pub use totals::OrderTotals;
pub use types::*;
