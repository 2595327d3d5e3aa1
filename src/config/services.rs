use crate::adapters::memory_repo::InMemoryProductRepo;
use crate::adapters::notifier::{
    DummyProductUpdatedNotifier, HttpNotifierOptions, HttpProductUpdatedNotifier,
};
use crate::app::{ListProductsDeps, UpsertProductDeps};
use crate::config::cli::CatalogConfig;
use crate::config::seed::SeedFile;
use crate::domain::model::Product;
use crate::domain::ports::{system_clock, Clock, ProductRepo, ProductUpdatedNotifier};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum NotifierSelection {
    Dummy,
    Http(HttpNotifierOptions),
}

/// A non-blank base URL selects the HTTP notifier; anything else the dummy one.
pub fn select_notifier(
    base_url: Option<&str>,
    host_key: Option<String>,
    timeout: Duration,
) -> NotifierSelection {
    match base_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => NotifierSelection::Http(
            HttpNotifierOptions::new(url)
                .with_host_key(host_key)
                .with_timeout(timeout),
        ),
        None => NotifierSelection::Dummy,
    }
}

pub fn build_notifier(selection: NotifierSelection) -> Result<Arc<dyn ProductUpdatedNotifier>> {
    match selection {
        NotifierSelection::Dummy => {
            tracing::info!("PRODUCT_UPDATED_BASE_URL not set, product-updated events are dropped");
            Ok(Arc::new(DummyProductUpdatedNotifier::new()))
        }
        NotifierSelection::Http(options) => {
            let notifier = HttpProductUpdatedNotifier::new(options)?;
            tracing::info!("Product-updated events go to {}", notifier.endpoint());
            Ok(Arc::new(notifier))
        }
    }
}

/// Process-wide dependencies, built once at startup and shared by every request.
#[derive(Clone)]
pub struct AppServices {
    pub product_repo: Arc<dyn ProductRepo>,
    pub product_updated_notifier: Arc<dyn ProductUpdatedNotifier>,
    pub now: Clock,
}

impl AppServices {
    pub fn new(
        product_repo: Arc<dyn ProductRepo>,
        product_updated_notifier: Arc<dyn ProductUpdatedNotifier>,
        now: Clock,
    ) -> Self {
        Self {
            product_repo,
            product_updated_notifier,
            now,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let now = system_clock();

        let initial = Self::initial_products(config, now())?;
        tracing::info!("Seeding catalog with {} products", initial.len());
        let product_repo = Arc::new(InMemoryProductRepo::with_products(initial));

        let selection = select_notifier(
            config.notifier_base_url(),
            config.product_updated_key.clone(),
            config.notify_timeout(),
        );
        let product_updated_notifier = build_notifier(selection)?;

        Ok(Self::new(product_repo, product_updated_notifier, now))
    }

    fn initial_products(
        config: &CatalogConfig,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<Vec<Product>> {
        if config.no_seed {
            return Ok(Vec::new());
        }
        match &config.seed_file {
            Some(path) => {
                tracing::debug!("Loading seed products from {}", path.display());
                Ok(SeedFile::from_file(path)?.into_products(now))
            }
            None => Ok(SeedFile::demo(now)),
        }
    }

    pub fn list_products_deps(&self) -> ListProductsDeps {
        ListProductsDeps {
            product_repo: Arc::clone(&self.product_repo),
        }
    }

    pub fn upsert_product_deps(&self) -> UpsertProductDeps {
        UpsertProductDeps {
            product_repo: Arc::clone(&self.product_repo),
            now: Arc::clone(&self.now),
            product_updated_notifier: Arc::clone(&self.product_updated_notifier),
        }
    }
}
