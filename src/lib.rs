pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod http;
pub mod utils;

pub use adapters::memory_repo::InMemoryProductRepo;
pub use adapters::notifier::{
    DummyProductUpdatedNotifier, HttpNotifierOptions, HttpProductUpdatedNotifier,
};
pub use config::{AppServices, CatalogConfig};
pub use domain::model::{Product, ProductUpdatedDto, UpsertProductInput};
pub use domain::ports::{ProductRepo, ProductUpdatedNotifier};
pub use utils::error::{CatalogError, Result};
