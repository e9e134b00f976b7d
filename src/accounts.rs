//! User account store: keyed and unique by username, with per-account carts.

use crate::codec;
use crate::error::{Error, Result};
use crate::record::{AccountDraft, Cart, UserAccount};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Username of the account guaranteed to exist after [`AccountStore::open`].
pub const ADMIN_USERNAME: &str = "admin";

/// JSON-file-backed account collection.
///
/// Same discipline as the inventory: one exclusive lock over the whole
/// index, held across the snapshot write, and no rollback of the in-memory
/// change when that write fails.
pub struct AccountStore {
    path: PathBuf,
    state: Mutex<BTreeMap<String, UserAccount>>,
}

fn snapshot(index: &BTreeMap<String, UserAccount>) -> Vec<UserAccount> {
    index.values().cloned().collect()
}

impl AccountStore {
    /// Open the store at `path`, creating an empty file if none exists and
    /// discarding one that does not parse as an account array. Guarantees
    /// the `admin` account afterwards: when the loaded file has none, an
    /// `admin`/`admin` account is created through the normal create path
    /// (and therefore persisted).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records: Vec<UserAccount> = codec::load_or_init(&path)?;

        let mut index = BTreeMap::new();
        for account in records {
            index.insert(account.user_name.clone(), account);
        }

        let store = Self {
            path,
            state: Mutex::new(index),
        };
        if store.get(ADMIN_USERNAME).is_none() {
            store.create(AccountDraft {
                first_name: ADMIN_USERNAME.to_string(),
                last_name: String::new(),
                user_name: ADMIN_USERNAME.to_string(),
                password: ADMIN_USERNAME.to_string(),
            })?;
        }
        Ok(store)
    }

    // ---- reads ----

    /// Look up an account by username.
    #[must_use]
    pub fn get(&self, user_name: &str) -> Option<UserAccount> {
        self.state.lock().get(user_name).cloned()
    }

    /// `true` only when an account named `user_name` exists and its stored
    /// password equals `password` exactly. An unknown username is a plain
    /// `false`, never an error.
    #[must_use]
    pub fn authenticate(&self, user_name: &str, password: &str) -> bool {
        self.state
            .lock()
            .get(user_name)
            .is_some_and(|a| a.credentials_match(user_name, password))
    }

    /// The cart for `user_name`, or `None` when no such account exists.
    #[must_use]
    pub fn cart(&self, user_name: &str) -> Option<Cart> {
        self.state.lock().get(user_name).map(|a| a.cart.clone())
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().len()
    }

    /// `true` when no accounts are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Path to the backing JSON file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ---- writes ----

    /// Register a new account with an empty cart. Fails with
    /// [`Error::AlreadyExists`] when the username is taken.
    pub fn create(&self, draft: AccountDraft) -> Result<UserAccount> {
        let mut index = self.state.lock();
        if index.contains_key(&draft.user_name) {
            return Err(Error::AlreadyExists(draft.user_name));
        }

        let account = UserAccount {
            first_name: draft.first_name,
            last_name: draft.last_name,
            user_name: draft.user_name,
            password: draft.password,
            cart: Cart::new(),
        };
        index.insert(account.user_name.clone(), account.clone());
        tracing::info!(user = %account.user_name, "account created");

        codec::write_records(&self.path, &snapshot(&index))?;
        Ok(account)
    }

    /// Replace the stored account wholesale, cart included. Returns `None`
    /// when the username is not registered. A caller that does not carry
    /// the current cart through will lose it.
    pub fn update(&self, account: UserAccount) -> Result<Option<UserAccount>> {
        let mut index = self.state.lock();
        if !index.contains_key(&account.user_name) {
            return Ok(None);
        }

        index.insert(account.user_name.clone(), account.clone());
        tracing::info!(user = %account.user_name, "account updated");

        codec::write_records(&self.path, &snapshot(&index))?;
        Ok(Some(account))
    }

    /// Remove an account. Returns `false` when the username is absent.
    pub fn delete(&self, user_name: &str) -> Result<bool> {
        let mut index = self.state.lock();
        if index.remove(user_name).is_none() {
            return Ok(false);
        }
        tracing::info!(user = %user_name, "account deleted");

        codec::write_records(&self.path, &snapshot(&index))?;
        Ok(true)
    }

    /// Reset the cart for `user_name` to empty. Returns `false` when the
    /// account does not exist.
    pub fn clear_cart(&self, user_name: &str) -> Result<bool> {
        let mut index = self.state.lock();
        let Some(account) = index.get_mut(user_name) else {
            return Ok(false);
        };
        account.cart = Cart::new();
        tracing::info!(user = %user_name, "cart cleared");

        codec::write_records(&self.path, &snapshot(&index))?;
        Ok(true)
    }
}

impl std::fmt::Debug for AccountStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
