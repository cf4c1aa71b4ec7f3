//! Catalog types: blueprints, print providers and variants

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product template in the vendor catalog (e.g. a specific T-shirt model)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Blueprint {
    /// Case-insensitive match against title, brand and model.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [Some(&self.title), self.brand.as_ref(), self.model.as_ref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// A fulfillment partner able to print a given blueprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintProvider {
    pub id: u64,
    #[serde(default)]
    pub title: String,
}

/// Raw catalog variant as returned by the vendor.
///
/// Option values appear either as plain strings or as `{ "title": ... }`
/// objects depending on the endpoint version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogVariant {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub options: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

impl CatalogVariant {
    /// Non-empty label of an option such as `color` or `size`.
    pub fn option_label(&self, key: &str) -> Option<&str> {
        let label = match self.options.get(key)? {
            Value::String(text) => text.as_str(),
            Value::Object(object) => object.get("title")?.as_str()?,
            _ => return None,
        };
        let label = label.trim();
        (!label.is_empty()).then_some(label)
    }
}

/// Variant listing payload: a bare array or an object wrapping `variants`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VariantsResponse {
    List(Vec<CatalogVariant>),
    Wrapped { variants: Vec<CatalogVariant> },
}

impl VariantsResponse {
    pub fn into_variants(self) -> Vec<CatalogVariant> {
        match self {
            Self::List(variants) | Self::Wrapped { variants } => variants,
        }
    }
}

/// Normalized variant with its size and color resolved
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantOption {
    pub id: u64,
    pub size: String,
    pub color: String,
    pub is_available: bool,
}
