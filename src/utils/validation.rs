use crate::utils::error::{CatalogError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CatalogError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

fn product_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,127}$").expect("product id pattern is valid")
    })
}

/// Ids are path segments in `/products/{id}`, so they stay URL-safe.
pub fn validate_product_id(id: &str) -> Result<()> {
    if product_id_pattern().is_match(id) {
        Ok(())
    } else {
        Err(CatalogError::ValidationError {
            field: "id".to_string(),
            reason: format!(
                "'{}' must be 1-128 characters of letters, digits, '.', '_' or '-' and start with a letter or digit",
                id
            ),
        })
    }
}

pub fn validate_product_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CatalogError::ValidationError {
            field: "name".to_string(),
            reason: "name cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Returns the price as the unsigned value stored on a `Product`.
pub fn validate_price_pence(price_pence: i64) -> Result<u64> {
    u64::try_from(price_pence).map_err(|_| CatalogError::ValidationError {
        field: "pricePence".to_string(),
        reason: format!("price must be zero or positive, got {}", price_pence),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://example.com").is_ok());
        assert!(validate_url("base_url", "http://localhost:7071").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeout", 10u64, 1, 300).is_ok());
        assert!(validate_range("timeout", 0u64, 1, 300).is_err());
        assert!(validate_range("timeout", 301u64, 1, 300).is_err());
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("p-001").is_ok());
        assert!(validate_product_id("SKU_12.blue").is_ok());
        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("-leading-dash").is_err());
        assert!(validate_product_id("has space").is_err());
        assert!(validate_product_id("a/b").is_err());
        assert!(validate_product_id(&"x".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_product_fields() {
        assert!(validate_product_name("Widget").is_ok());
        assert!(validate_product_name("   ").is_err());

        assert_eq!(validate_price_pence(0).unwrap(), 0);
        assert_eq!(validate_price_pence(1299).unwrap(), 1299);

        let err = validate_price_pence(-1).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("pricePence"));
    }
}
