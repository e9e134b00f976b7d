//! Flat-file e-commerce backend.
//!
//! Two JSON-file-backed record stores — product inventory and user
//! accounts — behind a small HTTP API. Each store keeps its whole
//! collection in memory under one exclusive lock and rewrites its backing
//! file on every mutation, so the file is always a complete snapshot of
//! the last successful change.
//!
//! ```rust,no_run
//! use stockroom::inventory::ProductStore;
//! use stockroom::record::ProductDraft;
//!
//! let store = ProductStore::open("inventory.json").unwrap();
//! let product = store.create(ProductDraft {
//!     name: "Cool Product".into(),
//!     description: "the cool one".into(),
//!     price: 9.99,
//!     quantity: 10,
//! }).unwrap();
//! assert_eq!(store.get(product.id), Some(product));
//! ```
//!
//! **Single-process only.** If multiple processes open the same files they
//! will clobber each other. Use advisory file locking or a real database
//! for multi-process access.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod accounts;
pub mod api;
pub mod codec;
pub mod config;
pub mod error;
pub mod inventory;
pub mod record;

pub use accounts::AccountStore;
pub use error::{Error, Result};
pub use inventory::ProductStore;
pub use record::{AccountDraft, Cart, Product, ProductDraft, ProductId, UserAccount};
