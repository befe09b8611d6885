use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductId, UpdateProduct};

/// Repository trait for Product persistence
///
/// `create` and `list` never fail. Lookups report a missing product as `None`
/// or `false` and leave the decision to the caller; only `update` needs the
/// id to exist and returns `NotFound` otherwise.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, oldest first
    async fn list(&self) -> Vec<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: ProductId) -> Option<Product>;

    /// Store a new product under the next unused id
    async fn create(&self, input: CreateProduct) -> Product;

    /// Replace name and price of an existing product
    async fn update(&self, id: ProductId, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by ID, returning whether it existed
    async fn delete(&self, id: ProductId) -> bool;

    /// Number of stored products
    async fn count(&self) -> usize;
}

/// Products keyed by id plus the counter that issues ids.
///
/// Ids only grow, so the map's key order is creation order.
#[derive(Debug)]
struct ProductStore {
    products: BTreeMap<ProductId, Product>,
    next_id: ProductId,
}

impl ProductStore {
    fn insert(&mut self, input: CreateProduct) -> Product {
        let id = self.next_id;
        self.next_id += 1;

        let product = Product::new(id, input);
        self.products.insert(id, product.clone());
        product
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of ProductRepository
///
/// Clones share the same store. Mutations take the write lock, reads share
/// the read lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<ProductStore>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `seed`, created in iteration order.
    pub fn with_seed(seed: impl IntoIterator<Item = CreateProduct>) -> Self {
        let mut store = ProductStore::default();
        for input in seed {
            store.insert(input);
        }

        tracing::debug!(count = store.products.len(), "Seeded product repository");
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Vec<Product> {
        let store = self.store.read().await;
        store.products.values().cloned().collect()
    }

    async fn get_by_id(&self, id: ProductId) -> Option<Product> {
        let store = self.store.read().await;
        store.products.get(&id).cloned()
    }

    async fn create(&self, input: CreateProduct) -> Product {
        let mut store = self.store.write().await;
        let product = store.insert(input);

        tracing::info!(product_id = product.id(), "Created product");
        product
    }

    async fn update(&self, id: ProductId, input: UpdateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        let product = store
            .products
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;

        product.apply_update(input);
        let updated = product.clone();

        tracing::info!(product_id = id, "Updated product");
        Ok(updated)
    }

    async fn delete(&self, id: ProductId) -> bool {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            true
        } else {
            false
        }
    }

    async fn count(&self) -> usize {
        self.store.read().await.products.len()
    }
}
