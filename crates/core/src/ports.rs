//! Merchant API port
//!
//! Implemented by the HTTP adapter in `podpublish-infra` and by in-memory
//! mocks in tests.

use async_trait::async_trait;
use podpublish_domain::{
    Blueprint, CatalogVariant, CreatedProduct, DesignFile, PrintProvider, ProductBody,
    PublishFlags, Result, Shop, UploadedImage,
};

/// Operations the publisher needs from the print-on-demand vendor
#[async_trait]
pub trait MerchantApi: Send + Sync {
    /// Shops linked to the token's account. Also serves as the token check.
    async fn list_shops(&self) -> Result<Vec<Shop>>;

    async fn list_blueprints(&self) -> Result<Vec<Blueprint>>;

    async fn list_print_providers(&self, blueprint_id: u64) -> Result<Vec<PrintProvider>>;

    /// Raw variants for a blueprint/provider pair; out-of-stock variants
    /// are only included when asked for.
    async fn list_variants(
        &self,
        blueprint_id: u64,
        provider_id: u64,
        include_out_of_stock: bool,
    ) -> Result<Vec<CatalogVariant>>;

    /// Upload artwork to the media library.
    async fn upload_image(&self, file: &DesignFile) -> Result<UploadedImage>;

    async fn create_product(&self, shop_id: u64, body: &ProductBody) -> Result<CreatedProduct>;

    async fn publish_product(
        &self,
        shop_id: u64,
        product_id: &str,
        flags: &PublishFlags,
    ) -> Result<()>;
}
