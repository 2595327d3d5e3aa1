use crate::domain::model::ProductUpdatedDto;
use crate::domain::ports::ProductUpdatedNotifier;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

pub const PRODUCT_UPDATED_PATH: &str = "/integration/events/product-updated";

/// Header carrying the static key configured for the receiving host.
pub const HOST_KEY_HEADER: &str = "x-functions-key";

pub const DEFAULT_NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Used when no webhook sink is configured. Never performs I/O.
#[derive(Debug, Clone, Default)]
pub struct DummyProductUpdatedNotifier;

impl DummyProductUpdatedNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProductUpdatedNotifier for DummyProductUpdatedNotifier {
    async fn notify_product_updated(&self, product: &ProductUpdatedDto) -> Result<()> {
        tracing::debug!("No product-updated sink configured, skipping {}", product.id);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct HttpNotifierOptions {
    pub base_url: String,
    pub host_key: Option<String>,
    pub timeout: Duration,
}

impl HttpNotifierOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            host_key: None,
            timeout: DEFAULT_NOTIFY_TIMEOUT,
        }
    }

    pub fn with_host_key(mut self, host_key: Option<String>) -> Self {
        self.host_key = host_key.filter(|key| !key.trim().is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// POSTs the JSON dto to `{base_url}/integration/events/product-updated`.
#[derive(Debug, Clone)]
pub struct HttpProductUpdatedNotifier {
    endpoint: String,
    host_key: Option<String>,
    client: Client,
}

impl HttpProductUpdatedNotifier {
    pub fn new(options: HttpNotifierOptions) -> Result<Self> {
        let client = Client::builder().timeout(options.timeout).build()?;
        Ok(Self::with_client(options, client))
    }

    pub fn with_client(options: HttpNotifierOptions, client: Client) -> Self {
        let endpoint = format!(
            "{}{}",
            options.base_url.trim().trim_end_matches('/'),
            PRODUCT_UPDATED_PATH
        );
        Self {
            endpoint,
            host_key: options.host_key,
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ProductUpdatedNotifier for HttpProductUpdatedNotifier {
    async fn notify_product_updated(&self, product: &ProductUpdatedDto) -> Result<()> {
        tracing::debug!("Posting product-updated event for {} to {}", product.id, self.endpoint);

        let mut request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(product);
        if let Some(key) = &self.host_key {
            request = request.header(HOST_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Product-updated webhook responded with {}", status);

        if !status.is_success() {
            return Err(CatalogError::NotificationError {
                message: format!("{} responded with {}", self.endpoint, status),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use httpmock::prelude::*;

    fn dto() -> ProductUpdatedDto {
        ProductUpdatedDto {
            id: "p-1".to_string(),
            name: "Widget".to_string(),
            price_pence: 500,
            description: "d".to_string(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_dummy_notifier_always_succeeds() {
        let notifier = DummyProductUpdatedNotifier::new();
        tokio_test::assert_ok!(notifier.notify_product_updated(&dto()).await);
    }

    #[tokio::test]
    async fn test_http_notifier_posts_dto_with_host_key() {
        let server = MockServer::start_async().await;
        let webhook = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(PRODUCT_UPDATED_PATH)
                    .header("content-type", "application/json")
                    .header(HOST_KEY_HEADER, "secret-key")
                    .json_body(serde_json::json!({
                        "id": "p-1",
                        "name": "Widget",
                        "pricePence": 500,
                        "description": "d",
                        "updatedAt": "2024-05-01T12:00:00.000Z"
                    }));
                then.status(202);
            })
            .await;

        let options = HttpNotifierOptions::new(server.base_url())
            .with_host_key(Some("secret-key".to_string()));
        let notifier = HttpProductUpdatedNotifier::new(options).unwrap();

        tokio_test::assert_ok!(notifier.notify_product_updated(&dto()).await);
        webhook.assert_async().await;
    }

    #[tokio::test]
    async fn test_http_notifier_trims_trailing_slash() {
        let notifier =
            HttpProductUpdatedNotifier::new(HttpNotifierOptions::new("http://localhost:7071/api/"))
                .unwrap();
        assert_eq!(
            notifier.endpoint(),
            "http://localhost:7071/api/integration/events/product-updated"
        );
    }

    #[test]
    fn test_blank_host_key_is_dropped() {
        let options = HttpNotifierOptions::new("http://localhost").with_host_key(Some("  ".into()));
        assert_eq!(options.host_key, None);
    }

    #[tokio::test]
    async fn test_http_notifier_reports_error_status() {
        let server = MockServer::start_async().await;
        let webhook = server
            .mock_async(|when, then| {
                when.method(POST).path(PRODUCT_UPDATED_PATH);
                then.status(500);
            })
            .await;

        let notifier =
            HttpProductUpdatedNotifier::new(HttpNotifierOptions::new(server.base_url())).unwrap();

        let err = notifier.notify_product_updated(&dto()).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotificationError { .. }));
        webhook.assert_async().await;
    }

    #[tokio::test]
    async fn test_http_notifier_reports_transport_error() {
        // 沒有服務監聽的端口
        let options = HttpNotifierOptions::new("http://127.0.0.1:1")
            .with_timeout(Duration::from_secs(2));
        let notifier = HttpProductUpdatedNotifier::new(options).unwrap();

        let err = notifier.notify_product_updated(&dto()).await.unwrap_err();
        assert!(matches!(err, CatalogError::ApiError(_)));
    }
}
