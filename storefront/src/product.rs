//! Product records as they appear in the catalog JSON, and the display
//! record derived from them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use catalog_core::format_currency;

/// One product of a catalog file.
///
/// Keys are the ones used by the catalog files (`Producto`, `Código`, ...).
/// Fields are passed through untouched; missing keys fall back to empty
/// strings or zero, and numeric codes are accepted as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(rename = "Imagen", deserialize_with = "lenient_text")]
    pub image: String,
    #[serde(rename = "Producto", deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(rename = "Código", deserialize_with = "lenient_text")]
    pub code: String,
    #[serde(rename = "Categoría", deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(rename = "Descripción", deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(rename = "Precio_público", deserialize_with = "lenient_number")]
    pub public_price: f64,
    #[serde(rename = "Precio_mayorista", deserialize_with = "lenient_number")]
    pub wholesale_price: f64,
    #[serde(rename = "Estado", deserialize_with = "lenient_text")]
    pub status: String,
}

impl Product {
    /// Build the display record, formatting both prices in `currency`.
    pub fn card(&self, currency: &str) -> ProductCard {
        ProductCard {
            image: self.image.clone(),
            name: self.name.clone(),
            code: self.code.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            public_price: format_currency(self.public_price, currency),
            wholesale_price: format_currency(self.wholesale_price, currency),
            status: self.status.clone(),
        }
    }
}

/// What a renderer shows for one product. Prices are already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub image: String,
    pub name: String,
    pub code: String,
    pub category: String,
    pub description: String,
    pub public_price: String,
    pub wholesale_price: String,
    pub status: String,
}

/// Parse a catalog document: a JSON array of product records.
pub fn parse_catalog(text: &str) -> serde_json::Result<Vec<Product>> {
    serde_json::from_str(text)
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(text) => text.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}
