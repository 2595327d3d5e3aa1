use crate::app::result::UseCaseResult;
use crate::domain::model::{Product, ProductUpdatedDto, UpsertProductInput};
use crate::domain::ports::{Clock, ProductRepo, ProductUpdatedNotifier};
use crate::utils::error::Result;
use crate::utils::validation::{validate_price_pence, validate_product_id, validate_product_name};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct UpsertProductDeps {
    pub product_repo: Arc<dyn ProductRepo>,
    pub now: Clock,
    pub product_updated_notifier: Arc<dyn ProductUpdatedNotifier>,
}

pub fn generate_product_id() -> String {
    format!("p-{}", Uuid::now_v7())
}

/// Validates the input and turns it into the product that will be stored.
/// `updated_at` always comes from the injected clock.
fn build_product(input: UpsertProductInput, now: &Clock) -> Result<Product> {
    validate_product_name(&input.name)?;
    let price_pence = validate_price_pence(input.price_pence)?;

    let id = match input.id.map(|id| id.trim().to_string()) {
        Some(id) if !id.is_empty() => {
            validate_product_id(&id)?;
            id
        }
        _ => generate_product_id(),
    };

    Ok(Product {
        id,
        name: input.name.trim().to_string(),
        price_pence,
        description: input.description,
        updated_at: now(),
    })
}

/// Create-or-replace a product, then tell the notifier about it.
///
/// The notification runs on a detached task. Its outcome is only logged and
/// never changes the returned envelope.
pub async fn upsert_product(
    deps: &UpsertProductDeps,
    input: UpsertProductInput,
) -> UseCaseResult<Product> {
    let product = match build_product(input, &deps.now) {
        Ok(product) => product,
        Err(e) => {
            tracing::warn!("Rejected product upsert: {}", e);
            return UseCaseResult::from_error(&e);
        }
    };

    let saved = match deps.product_repo.save(product).await {
        Ok(saved) => saved,
        Err(e) => {
            tracing::error!("❌ Failed to save product: {}", e);
            return UseCaseResult::from_error(&e);
        }
    };
    tracing::info!("Product {} upserted", saved.id);

    let dto = ProductUpdatedDto::from(&saved);
    let notifier = Arc::clone(&deps.product_updated_notifier);
    tokio::spawn(async move {
        if let Err(e) = notifier.notify_product_updated(&dto).await {
            tracing::warn!("⚠️ Product-updated notification for {} failed: {}", dto.id, e);
        }
    });

    UseCaseResult::ok(saved)
}
