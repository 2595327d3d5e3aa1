use crate::domain::model::{Product, ProductUpdatedDto};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Storage contract for products. Implementations hand out owned copies only;
/// nothing returned here aliases the stored state.
#[async_trait]
pub trait ProductRepo: Send + Sync {
    /// A missing id is `Ok(None)`, never an error.
    async fn get_by_id(&self, id: &str) -> Result<Option<Product>>;
    async fn list(&self) -> Result<Vec<Product>>;
    /// Upsert by id. No validation happens at this layer.
    async fn save(&self, product: Product) -> Result<Product>;
    /// Idempotent.
    async fn delete(&self, id: &str) -> Result<()>;
}

#[async_trait]
pub trait ProductUpdatedNotifier: Send + Sync {
    async fn notify_product_updated(&self, product: &ProductUpdatedDto) -> Result<()>;
}

/// Injected time source, so the use cases never read the wall clock directly.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}
