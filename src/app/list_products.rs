use crate::app::result::UseCaseResult;
use crate::domain::model::Product;
use crate::domain::ports::ProductRepo;
use std::sync::Arc;

#[derive(Clone)]
pub struct ListProductsDeps {
    pub product_repo: Arc<dyn ProductRepo>,
}

pub async fn list_products(deps: &ListProductsDeps) -> UseCaseResult<Vec<Product>> {
    match deps.product_repo.list().await {
        Ok(products) => {
            tracing::debug!("Listed {} products", products.len());
            UseCaseResult::ok(products)
        }
        Err(e) => {
            tracing::error!("❌ Failed to list products: {}", e);
            UseCaseResult::from_error(&e)
        }
    }
}
