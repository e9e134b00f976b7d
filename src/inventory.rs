//! Product inventory store: keyed by id, unique by name.

use crate::codec;
use crate::error::{Error, Result};
use crate::record::{Product, ProductDraft, ProductId};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// JSON-file-backed product collection.
///
/// One exclusive lock covers the whole index; every operation, reads
/// included, holds it for its full duration, and every mutation rewrites
/// the backing file before returning. The file is therefore always a
/// complete snapshot of the last successful mutation. When a snapshot
/// write fails the in-memory change is kept and the error is surfaced;
/// the file catches up on the next successful mutation.
pub struct ProductStore {
    path: PathBuf,
    state: Mutex<InventoryState>,
}

struct InventoryState {
    index: BTreeMap<ProductId, Product>,
    last_id: ProductId,
}

impl InventoryState {
    // Ids grow monotonically from the max seen at load time and are never
    // handed out twice, even after deletion.
    fn next_id(&mut self) -> ProductId {
        self.last_id += 1;
        self.last_id
    }

    fn snapshot(&self) -> Vec<Product> {
        self.index.values().cloned().collect()
    }
}

impl ProductStore {
    /// Open the store at `path`, creating an empty file if none exists. A
    /// file that does not parse as a product array is discarded and
    /// replaced with an empty one.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records: Vec<Product> = codec::load_or_init(&path)?;

        let mut index = BTreeMap::new();
        let mut last_id = 0;
        for product in records {
            last_id = last_id.max(product.id);
            index.insert(product.id, product);
        }

        Ok(Self {
            path,
            state: Mutex::new(InventoryState { index, last_id }),
        })
    }

    // ---- reads ----

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.state.lock().index.get(&id).cloned()
    }

    /// All products, ascending by id.
    #[must_use]
    pub fn list(&self) -> Vec<Product> {
        self.state.lock().snapshot()
    }

    /// Products whose name contains `keyword` as a case-insensitive
    /// substring. `None` yields an empty result rather than an error, and
    /// so does a keyword that matches nothing.
    #[must_use]
    pub fn search(&self, keyword: Option<&str>) -> Vec<Product> {
        let Some(keyword) = keyword else {
            tracing::warn!("search called without a keyword");
            return Vec::new();
        };
        let needle = keyword.to_lowercase();
        self.state
            .lock()
            .index
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Number of products listed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().index.len()
    }

    /// `true` when the inventory has no products.
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

    /// Add a new product. Fails with [`Error::AlreadyExists`] when a
    /// product with the same name is already listed, regardless of id.
    pub fn create(&self, draft: ProductDraft) -> Result<Product> {
        let mut state = self.state.lock();
        if state.index.values().any(|p| p.name_matches(&draft.name)) {
            return Err(Error::AlreadyExists(draft.name));
        }

        let id = state.next_id();
        let product = Product {
            name: draft.name,
            id,
            description: draft.description,
            price: draft.price,
            quantity: draft.quantity,
        };
        state.index.insert(id, product.clone());
        tracing::info!(id, name = %product.name, "product created");

        codec::write_records(&self.path, &state.snapshot())?;
        Ok(product)
    }

    /// Replace the product stored under `product.id` wholesale. Returns
    /// `None` when no product has that id. The replacement is not checked
    /// against other listings' names, so an update may introduce a
    /// duplicate name.
    pub fn update(&self, product: Product) -> Result<Option<Product>> {
        let mut state = self.state.lock();
        if !state.index.contains_key(&product.id) {
            return Ok(None);
        }

        state.index.insert(product.id, product.clone());
        tracing::info!(id = product.id, "product updated");

        codec::write_records(&self.path, &state.snapshot())?;
        Ok(Some(product))
    }

    /// Remove a product. Returns `false` when the id is absent.
    pub fn delete(&self, id: ProductId) -> Result<bool> {
        let mut state = self.state.lock();
        if state.index.remove(&id).is_none() {
            return Ok(false);
        }
        tracing::info!(id, "product deleted");

        codec::write_records(&self.path, &state.snapshot())?;
        Ok(true)
    }
}

impl std::fmt::Debug for ProductStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
