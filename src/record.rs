//! Record types stored by the two collections.
//!
//! Uniqueness is decided by natural key (product *name*, account
//! *username*), not by the id a store hands out. The predicates below are
//! the one place that rule lives; the derived `PartialEq` impls stay
//! structural so collection code can compare whole records safely.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Product id assigned by the inventory store. Never reused, even after
/// deletion.
pub type ProductId = u64;

/// Cart contents: product id mapped to quantity. Unordered.
///
/// serde_json writes integer keys as JSON strings and reads them back, so
/// the on-disk shape is `{"1": 2, ...}`.
pub type Cart = HashMap<ProductId, u32>;

/// A product listing in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name; doubles as the uniqueness key for creation.
    pub name: String,
    /// Store-assigned id, immutable after creation.
    pub id: ProductId,
    /// Free-form description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub quantity: u32,
}

impl Product {
    /// Whether this listing's name equals `name` exactly (case-sensitive).
    ///
    /// Two products with different ids but the same name are the same
    /// listing for uniqueness purposes.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name == name
    }
}

/// Payload for creating a product. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Display name, unique across the inventory.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub quantity: u32,
}

/// A user account. Keyed and unique by `user_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Unique login name.
    pub user_name: String,
    /// Stored in plaintext; compared verbatim on login.
    pub password: String,
    /// The account's cart. Absent in a record file means empty.
    #[serde(default)]
    pub cart: Cart,
}

impl UserAccount {
    /// Exact, case-sensitive credential check. `false` on any mismatch.
    pub fn credentials_match(&self, user_name: &str, password: &str) -> bool {
        self.user_name == user_name && self.password == password
    }
}

/// Payload for creating an account. The store supplies the empty cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDraft {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Unique login name.
    pub user_name: String,
    /// Plaintext password.
    pub password: String,
}
