// Application layer: use cases orchestrating the repository and notifier ports.

pub mod list_products;
pub mod result;
pub mod upsert_product;

pub use list_products::{list_products, ListProductsDeps};
pub use result::{ErrorKind, UseCaseResult};
pub use upsert_product::{upsert_product, UpsertProductDeps};
