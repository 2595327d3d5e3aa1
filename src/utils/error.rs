use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid product '{field}': {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Repository error: {message}")]
    RepositoryError { message: String },

    #[error("Product-updated notification failed: {message}")]
    NotificationError { message: String },
}

impl CatalogError {
    /// Caller-side input problems, as opposed to failures inside the service.
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::ValidationError { .. })
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
