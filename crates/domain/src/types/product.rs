//! Upload, product and publish payloads

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /uploads/images.json`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadImageRequest {
    pub file_name: String,
    /// Base64-encoded image bytes.
    pub contents: String,
}

impl fmt::Debug for UploadImageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadImageRequest")
            .field("file_name", &self.file_name)
            .field("contents_len", &self.contents.len())
            .finish()
    }
}

/// Image stored in the vendor's media library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

/// Body of `POST /shops/{shop}/products.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductBody {
    pub title: String,
    pub description: String,
    pub blueprint_id: u64,
    pub print_provider_id: u64,
    pub variants: Vec<VariantPrice>,
    pub print_areas: Vec<PrintArea>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantPrice {
    pub id: u64,
    /// Retail price in cents.
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintArea {
    pub variant_ids: Vec<u64>,
    pub placeholders: Vec<Placeholder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placeholder {
    pub position: String,
    pub images: Vec<ImagePlacement>,
}

/// Uploaded image positioned inside a placeholder; coordinates are relative
/// to the print area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePlacement {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub angle: f64,
}

/// Product draft returned after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedProduct {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// Which product fields the sales channel should take over on publish.
///
/// The four core fields are always sent. The optional ones are only sent
/// when configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishFlags {
    pub title: bool,
    pub description: bool,
    pub images: bool,
    pub variants: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<bool>,
    #[serde(rename = "keyFeatures", alias = "key_features", skip_serializing_if = "Option::is_none")]
    pub key_features: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_template: Option<bool>,
}

impl Default for PublishFlags {
    fn default() -> Self {
        Self {
            title: true,
            description: true,
            images: true,
            variants: true,
            tags: None,
            key_features: None,
            shipping_template: None,
        }
    }
}
