use crate::domain::model::Product;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_product_id, validate_product_name, Validate};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Products loaded into the in-memory store at startup.
///
/// ```toml
/// [[products]]
/// id = "p-001"
/// name = "Seeded Widget"
/// price_pence = 1299
/// description = "${WIDGET_BLURB}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub products: Vec<SeedProduct>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedProduct {
    pub id: String,
    pub name: String,
    pub price_pence: u64,
    #[serde(default)]
    pub description: String,
    /// Defaults to the load time when omitted. Either a native TOML
    /// offset date-time or a quoted RFC 3339 string.
    #[serde(default, deserialize_with = "deserialize_seed_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn deserialize_seed_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let text = match Option::<toml::Value>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(toml::Value::String(raw)) => raw,
        Some(toml::Value::Datetime(datetime)) => datetime.to_string(),
        Some(other) => {
            return Err(D::Error::custom(format!(
                "expected a date-time, got {}",
                other.type_str()
            )))
        }
    };

    DateTime::parse_from_rfc3339(&text)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|e| {
            D::Error::custom(format!(
                "'{}' is not an RFC 3339 date-time with an offset: {}",
                text, e
            ))
        })
}

impl SeedFile {
    /// 從 TOML 檔案載入種子資料
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let seed: SeedFile =
            toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
                field: "seed_file".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        seed.validate()?;
        Ok(seed)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("env placeholder pattern is valid");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// The two products a fresh development catalog starts with.
    pub fn demo(now: DateTime<Utc>) -> Vec<Product> {
        vec![
            Product {
                id: "p-001".to_string(),
                name: "Seeded Widget".to_string(),
                price_pence: 1299,
                description: "A seeded example product for local testing.".to_string(),
                updated_at: now - Duration::days(1),
            },
            Product {
                id: "p-002".to_string(),
                name: "Seeded Gadget".to_string(),
                price_pence: 2599,
                description: "Another seeded product to get you started.".to_string(),
                updated_at: now,
            },
        ]
    }

    pub fn into_products(self, now: DateTime<Utc>) -> Vec<Product> {
        self.products
            .into_iter()
            .map(|seed| Product {
                id: seed.id,
                name: seed.name,
                price_pence: seed.price_pence,
                description: seed.description,
                updated_at: seed.updated_at.unwrap_or(now),
            })
            .collect()
    }
}

impl Validate for SeedFile {
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for product in &self.products {
            validate_product_id(&product.id)?;
            validate_product_name(&product.name)?;
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::ConfigValidationError {
                    field: "seed_file".to_string(),
                    message: format!("duplicate product id '{}'", product.id),
                });
            }
        }
        Ok(())
    }
}
