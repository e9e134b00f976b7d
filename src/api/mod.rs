//! HTTP routing: thin glue mapping store outcomes to status codes.
//!
//! Handlers hold no business logic. They deserialize, call the store, and
//! translate the result: success is 200 (201 on create), an absent record
//! is 404 with an empty body, a uniqueness conflict is 409, and any
//! persistence failure is 500.
//!
//! ```text
//! GET    /health                       - liveness
//!
//! GET    /inventory                    - full product list
//! POST   /inventory                    - create product
//! PUT    /inventory                    - replace product by id
//! GET    /inventory/search?keyword=k   - name search (200 + [] on no match)
//! GET    /inventory/{id}               - one product
//! DELETE /inventory/{id}               - remove product
//!
//! POST   /users                        - create account
//! PUT    /users                        - replace account by username
//! GET    /users/{username}             - one account
//! DELETE /users/{username}             - remove account
//! GET    /users/{username}/{password}  - login check (boolean body)
//! GET    /users/cart/{username}        - the account's cart
//! DELETE /users/cart/{username}        - clear the account's cart
//! ```

pub mod accounts;
pub mod inventory;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::accounts::AccountStore;
use crate::error::Error;
use crate::inventory::ProductStore;

/// Application state shared across all handlers. Cheaply cloneable; both
/// stores live behind one `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    inventory: ProductStore,
    accounts: AccountStore,
}

impl AppState {
    /// Bundle the two stores into shared state.
    #[must_use]
    pub fn new(inventory: ProductStore, accounts: AccountStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                inventory,
                accounts,
            }),
        }
    }

    /// The product store.
    #[must_use]
    pub fn inventory(&self) -> &ProductStore {
        &self.inner.inventory
    }

    /// The account store.
    #[must_use]
    pub fn accounts(&self) -> &AccountStore {
        &self.inner.accounts
    }
}

/// Build the full application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/inventory",
            get(inventory::list)
                .post(inventory::create)
                .put(inventory::update),
        )
        .route("/inventory/search", get(inventory::search))
        .route(
            "/inventory/{id}",
            get(inventory::get).delete(inventory::delete),
        )
        .route("/users", post(accounts::create).put(accounts::update))
        .route(
            "/users/{username}",
            get(accounts::get).delete(accounts::delete),
        )
        .route("/users/{username}/{password}", get(accounts::login))
        .route(
            "/users/cart/{username}",
            get(accounts::cart).delete(accounts::clear_cart),
        )
        .with_state(state)
}

/// Liveness check. Does not touch the stores.
async fn health() -> &'static str {
    "ok"
}

// Uniqueness conflicts are the caller's fault; anything touching the file
// is a server-side failure.
pub(crate) fn reject(err: &Error) -> StatusCode {
    match err {
        Error::AlreadyExists(key) => {
            tracing::warn!(key = %key, "uniqueness conflict");
            StatusCode::CONFLICT
        }
        _ => {
            tracing::error!(error = %err, "store operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
