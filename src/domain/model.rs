use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price_pence: u64,
    pub description: String,
    #[serde(with = "iso_timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Payload sent to the product-updated webhook. Kept separate from `Product`
/// so the wire shape can change without touching storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdatedDto {
    pub id: String,
    pub name: String,
    pub price_pence: u64,
    pub description: String,
    #[serde(with = "iso_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl From<&Product> for ProductUpdatedDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price_pence: product.price_pence,
            description: product.description.clone(),
            updated_at: product.updated_at,
        }
    }
}

/// Caller-supplied upsert payload. A missing or blank `id` creates a new
/// product; `updated_at` is accepted but always replaced by the use case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProductInput {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub price_pence: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// ISO-8601 with millisecond precision and a `Z` suffix, e.g. `2024-05-01T12:00:00.000Z`.
pub mod iso_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn widget() -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Widget".to_string(),
            price_pence: 500,
            description: "d".to_string(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_product_serializes_camel_case_with_iso_timestamp() {
        let json = serde_json::to_value(widget()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "p-1",
                "name": "Widget",
                "pricePence": 500,
                "description": "d",
                "updatedAt": "2024-05-01T12:00:00.000Z"
            })
        );

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, widget());
    }

    #[test]
    fn test_dto_mirrors_product() {
        let product = widget();
        let dto = ProductUpdatedDto::from(&product);
        assert_eq!(dto.id, product.id);
        assert_eq!(dto.price_pence, product.price_pence);
        assert_eq!(dto.updated_at, product.updated_at);
    }

    #[test]
    fn test_upsert_input_allows_missing_id_and_description() {
        let input: UpsertProductInput =
            serde_json::from_str(r#"{"name":"Gizmo","pricePence":250}"#).unwrap();
        assert_eq!(input.id, None);
        assert_eq!(input.description, "");
        assert_eq!(input.updated_at, None);
        assert_eq!(input.price_pence, 250);
    }
}
