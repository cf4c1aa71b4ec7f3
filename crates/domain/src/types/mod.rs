//! Domain types and models
//!
//! Wire types mirror the vendor's JSON; batch types describe one run.

pub mod batch;
pub mod catalog;
pub mod product;
pub mod shop;

pub use batch::{BatchReport, BatchStage, DesignFile, ItemOutcome};
pub use catalog::{Blueprint, CatalogVariant, PrintProvider, VariantOption, VariantsResponse};
pub use product::{
    CreatedProduct, ImagePlacement, Placeholder, PrintArea, ProductBody, PublishFlags,
    UploadImageRequest, UploadedImage, VariantPrice,
};
pub use shop::Shop;
