use dashmap::DashMap;
use tokio::sync::Mutex;

use super::types::{Dollars, InventoryError, Product};
use crate::store::db::{InventoryDb, StoreError};

/// Shared inventory state: the in-memory cache, the write lock serializing
/// all mutations, and the durable store behind both.
///
/// ## Concurrency Model
/// - **Writes** (upsert/remove): serialized process-wide by `write_lock`.
///   The store commit and the matching cache mutation happen inside the
///   critical section; if the store write fails the cache is not touched.
/// - **Reads** (price_of/snapshot): hit the cache directly without taking
///   the write lock. A reader racing a writer sees the cache just before or
///   just after that writer's cache mutation, never a store/cache
///   disagreement older than the current critical section.
///
/// Store transactions are short single-key writes and run inline on the
/// request task.
pub struct InventoryService {
    db: InventoryDb,
    cache: DashMap<String, Product>,
    write_lock: Mutex<()>,
}

impl InventoryService {
    /// Build the service over an opened store, loading every stored entry
    /// into the cache. Runs to completion before the listener starts
    /// accepting connections.
    pub fn open(db: InventoryDb) -> Result<Self, StoreError> {
        let cache = DashMap::new();
        for (name, price) in db.load_all()? {
            cache.insert(
                name.clone(),
                Product {
                    name,
                    price: Dollars(price),
                },
            );
        }

        tracing::info!(count = cache.len(), "inventory cache loaded from store");
        Ok(Self {
            db,
            cache,
            write_lock: Mutex::new(()),
        })
    }

    /// Create or overwrite an item: store first, cache second, both under
    /// the write lock.
    pub async fn upsert(&self, name: &str, price: Dollars) -> Result<Product, StoreError> {
        let _guard = self.write_lock.lock().await;

        self.db.put(name, price.0)?;

        let product = Product {
            name: name.to_string(),
            price,
        };
        self.cache.insert(name.to_string(), product.clone());
        tracing::debug!(name, "cache entry updated");

        Ok(product)
    }

    /// Remove an item from store and cache.
    ///
    /// The existence check reads the cache before the lock is taken; an
    /// upsert of the same name landing between the check and the lock is
    /// deleted along with the entry that was seen. Accepted reordering,
    /// matching the lookup-then-delete contract of the HTTP surface.
    pub async fn remove(&self, name: &str) -> Result<Product, InventoryError> {
        let product = self
            .cache
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| InventoryError::NotFound(name.to_string()))?;

        let _guard = self.write_lock.lock().await;

        self.db.delete(name)?;

        self.cache.remove(name);
        tracing::debug!(name, "cache entry removed");

        Ok(product)
    }

    /// Price lookup straight from the cache; never takes the write lock.
    pub fn price_of(&self, name: &str) -> Option<Dollars> {
        self.cache.get(name).map(|entry| entry.value().price)
    }

    /// Snapshot of the whole inventory, sorted by name.
    pub fn snapshot(&self) -> Vec<Product> {
        let mut items: Vec<Product> = self
            .cache
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    /// Number of cached items.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
