use crate::app::{list_products, upsert_product, ErrorKind, UseCaseResult};
use crate::config::services::AppServices;
use crate::domain::model::UpsertProductInput;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub fn json_error(status: StatusCode, message: &str, error: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({
            "success": false,
            "message": message,
            "error": error.into(),
        })),
    )
        .into_response()
}

fn failure_response<T>(result: UseCaseResult<T>, message: &str) -> Response {
    let status = match result.error_kind {
        Some(ErrorKind::Validation) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    json_error(status, message, result.error.unwrap_or_default())
}

/// `GET /products`: the bare product array, not the envelope.
pub async fn list_products_handler(State(services): State<AppServices>) -> Response {
    let result = list_products(&services.list_products_deps()).await;

    if !result.success {
        return failure_response(result, "Failed to list products");
    }

    let products = result.data.unwrap_or_default();
    (StatusCode::OK, Json(products)).into_response()
}

pub async fn upsert_product_handler(
    State(services): State<AppServices>,
    payload: Result<Json<UpsertProductInput>, JsonRejection>,
) -> Response {
    // 無法解析的請求體也回傳統一的錯誤格式
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::warn!("Rejected product upsert body: {}", rejection.body_text());
            return json_error(
                StatusCode::BAD_REQUEST,
                "Failed to upsert product",
                rejection.body_text(),
            );
        }
    };

    let result = upsert_product(&services.upsert_product_deps(), input).await;

    if !result.success {
        return failure_response(result, "Failed to upsert product");
    }

    match result.data {
        Some(product) => (StatusCode::OK, Json(product)).into_response(),
        None => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to upsert product",
            "upsert returned no product",
        ),
    }
}

pub async fn get_product_handler(
    State(services): State<AppServices>,
    Path(id): Path<String>,
) -> Response {
    match services.product_repo.get_by_id(&id).await {
        Ok(Some(product)) => (StatusCode::OK, Json(product)).into_response(),
        Ok(None) => json_error(
            StatusCode::NOT_FOUND,
            "Product not found",
            format!("no product with id '{}'", id),
        ),
        Err(e) => {
            tracing::error!("❌ Failed to load product {}: {}", id, e);
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load product",
                e.to_string(),
            )
        }
    }
}

pub async fn delete_product_handler(
    State(services): State<AppServices>,
    Path(id): Path<String>,
) -> Response {
    match services.product_repo.delete(&id).await {
        Ok(()) => {
            tracing::info!("Product {} deleted", id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            tracing::error!("❌ Failed to delete product {}: {}", id, e);
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to delete product",
                e.to_string(),
            )
        }
    }
}
