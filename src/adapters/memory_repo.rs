use crate::domain::model::Product;
use crate::domain::ports::ProductRepo;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// In-memory `ProductRepo` for tests and local development.
///
/// Single process only: state lives in this value and is lost on restart.
/// `list` returns products ordered by id.
#[derive(Debug, Default)]
pub struct InMemoryProductRepo {
    store: RwLock<BTreeMap<String, Product>>,
}

impl InMemoryProductRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(initial: impl IntoIterator<Item = Product>) -> Self {
        let store = initial
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();
        Self {
            store: RwLock::new(store),
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepo for InMemoryProductRepo {
    async fn get_by_id(&self, id: &str) -> Result<Option<Product>> {
        Ok(self.store.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>> {
        Ok(self.store.read().await.values().cloned().collect())
    }

    async fn save(&self, product: Product) -> Result<Product> {
        let mut store = self.store.write().await;
        tracing::debug!("Saving product {} ({} stored)", product.id, store.len());
        store.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        if self.store.write().await.remove(id).is_none() {
            tracing::debug!("Delete of unknown product {} ignored", id);
        }
        Ok(())
    }
}
