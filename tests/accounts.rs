use stockroom::accounts::{AccountStore, ADMIN_USERNAME};
use stockroom::error::Error;
use stockroom::record::{AccountDraft, Cart};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("stockroom_test_accounts_{}.json", name))
}

fn draft(user_name: &str) -> AccountDraft {
    AccountDraft {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        user_name: user_name.to_string(),
        password: format!("{user_name}-pw"),
    }
}

// ---- admin bootstrap --------------------------------------------------------

#[test]
fn admin_is_created_when_absent() {
    let path = temp_path("admin_absent");
    let _ = std::fs::remove_file(&path);
    let store = AccountStore::open(&path).unwrap();

    let admin = store.get(ADMIN_USERNAME).unwrap();
    assert_eq!(admin.user_name, "admin");
    assert_eq!(admin.password, "admin");
    assert_eq!(admin.first_name, "admin");
    assert_eq!(admin.last_name, "");
    assert!(admin.cart.is_empty());

    // The bootstrap goes through the normal create path, so it persists.
    drop(store);
    let reloaded = AccountStore::open(&path).unwrap();
    assert_eq!(reloaded.len(), 1);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn admin_is_not_duplicated_when_present() {
    let path = temp_path("admin_present");
    let _ = std::fs::remove_file(&path);
    {
        let store = AccountStore::open(&path).unwrap();
        // Give the bootstrapped admin a distinguishable password.
        let mut admin = store.get(ADMIN_USERNAME).unwrap();
        admin.password = "hunter2".into();
        store.update(admin).unwrap().unwrap();
    }
    let store = AccountStore::open(&path).unwrap();
    assert_eq!(store.len(), 1);
    // The existing admin survives untouched; no admin/admin reset happened.
    assert_eq!(store.get(ADMIN_USERNAME).unwrap().password, "hunter2");
    let _ = std::fs::remove_file(&path);
}

// ---- create / get -----------------------------------------------------------

#[test]
fn create_then_get_returns_equal_record() {
    let path = temp_path("create_get");
    let _ = std::fs::remove_file(&path);
    let store = AccountStore::open(&path).unwrap();

    let created = store.create(draft("ada")).unwrap();
    assert!(created.cart.is_empty());
    assert_eq!(store.get("ada"), Some(created));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn create_duplicate_username_is_rejected() {
    let path = temp_path("dup_user");
    let _ = std::fs::remove_file(&path);
    let store = AccountStore::open(&path).unwrap();
    store.create(draft("ada")).unwrap();

    let err = store
        .create(AccountDraft {
            first_name: "Someone".into(),
            last_name: "Else".into(),
            user_name: "ada".into(),
            password: "other".into(),
        })
        .unwrap_err();
    assert!(matches!(err, Error::AlreadyExists(_)));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn get_unknown_username_returns_none() {
    let path = temp_path("get_missing");
    let _ = std::fs::remove_file(&path);
    let store = AccountStore::open(&path).unwrap();
    assert_eq!(store.get("nobody"), None);
    let _ = std::fs::remove_file(&path);
}

// ---- update / delete --------------------------------------------------------

#[test]
fn update_replaces_account_wholesale() {
    let path = temp_path("update");
    let _ = std::fs::remove_file(&path);
    let store = AccountStore::open(&path).unwrap();
    let mut account = store.create(draft("ada")).unwrap();

    account.first_name = "Augusta".into();
    account.cart.insert(3, 2);
    let updated = store.update(account.clone()).unwrap().unwrap();
    assert_eq!(updated, account);
    assert_eq!(store.cart("ada").unwrap().get(&3), Some(&2));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn update_without_the_cart_loses_it() {
    let path = temp_path("update_cart_drop");
    let _ = std::fs::remove_file(&path);
    let store = AccountStore::open(&path).unwrap();
    let mut account = store.create(draft("ada")).unwrap();
    account.cart.insert(1, 4);
    store.update(account.clone()).unwrap().unwrap();

    // Wholesale replacement: an update built without the current cart
    // replaces the stored one with empty.
    account.cart = Cart::new();
    store.update(account).unwrap().unwrap();
    assert!(store.cart("ada").unwrap().is_empty());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn update_unknown_username_returns_none() {
    let path = temp_path("update_missing");
    let _ = std::fs::remove_file(&path);
    let store = AccountStore::open(&path).unwrap();

    let mut ghost = store.create(draft("real")).unwrap();
    store.delete("real").unwrap();
    ghost.first_name = "Gone".into();
    assert_eq!(store.update(ghost).unwrap(), None);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn delete_then_get_is_none() {
    let path = temp_path("delete");
    let _ = std::fs::remove_file(&path);
    let store = AccountStore::open(&path).unwrap();
    store.create(draft("ada")).unwrap();

    assert!(store.delete("ada").unwrap());
    assert_eq!(store.get("ada"), None);
    assert!(!store.delete("ada").unwrap());
    let _ = std::fs::remove_file(&path);
}

// ---- authenticate -----------------------------------------------------------

#[test]
fn authenticate_requires_exact_credentials() {
    let path = temp_path("auth");
    let _ = std::fs::remove_file(&path);
    let store = AccountStore::open(&path).unwrap();
    store
        .create(AccountDraft {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            user_name: "ada".into(),
            password: "Secret".into(),
        })
        .unwrap();

    assert!(store.authenticate("ada", "Secret"));
    assert!(!store.authenticate("ada", "secret"));
    assert!(!store.authenticate("ada", ""));
    assert!(!store.authenticate("Ada", "Secret"));
    // Unknown usernames are a plain false, not an error.
    assert!(!store.authenticate("nobody", "Secret"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn bootstrapped_admin_can_log_in() {
    let path = temp_path("auth_admin");
    let _ = std::fs::remove_file(&path);
    let store = AccountStore::open(&path).unwrap();
    assert!(store.authenticate("admin", "admin"));
    let _ = std::fs::remove_file(&path);
}

// ---- carts ------------------------------------------------------------------

#[test]
fn cart_roundtrip_and_clear() {
    let path = temp_path("cart");
    let _ = std::fs::remove_file(&path);
    let store = AccountStore::open(&path).unwrap();
    let mut account = store.create(draft("ada")).unwrap();

    account.cart.insert(1, 2);
    account.cart.insert(9, 1);
    store.update(account).unwrap().unwrap();

    let cart = store.cart("ada").unwrap();
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.get(&9), Some(&1));

    assert!(store.clear_cart("ada").unwrap());
    assert!(store.cart("ada").unwrap().is_empty());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn cart_of_unknown_account_is_none() {
    let path = temp_path("cart_missing");
    let _ = std::fs::remove_file(&path);
    let store = AccountStore::open(&path).unwrap();
    assert_eq!(store.cart("nobody"), None);
    assert!(!store.clear_cart("nobody").unwrap());
    let _ = std::fs::remove_file(&path);
}

// ---- reload -----------------------------------------------------------------

#[test]
fn persist_and_reload_roundtrip() {
    let path = temp_path("roundtrip");
    let _ = std::fs::remove_file(&path);
    {
        let store = AccountStore::open(&path).unwrap();
        let mut account = store.create(draft("ada")).unwrap();
        account.cart.insert(5, 3);
        store.update(account).unwrap().unwrap();
        store.create(draft("grace")).unwrap();
    }
    let store = AccountStore::open(&path).unwrap();
    assert_eq!(store.len(), 3); // admin, ada, grace
    assert_eq!(store.cart("ada").unwrap().get(&5), Some(&3));
    assert!(store.authenticate("grace", "grace-pw"));
    let _ = std::fs::remove_file(&path);
}
