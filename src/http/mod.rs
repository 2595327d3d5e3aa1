//! HTTP surface: routing and mapping of use-case results to wire responses.

pub mod products;

use crate::config::services::AppServices;
use axum::{routing::get, Json, Router};

pub fn build_router(services: AppServices) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/products",
            get(products::list_products_handler).put(products::upsert_product_handler),
        )
        .route(
            "/products/:id",
            get(products::get_product_handler).delete(products::delete_product_handler),
        )
        .with_state(services)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
