pub mod cli;
pub mod seed;
pub mod services;

pub use cli::CatalogConfig;
pub use services::AppServices;
