//! `MerchantApi` implementation for the Printify REST API

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use podpublish_common::Credential;
use podpublish_core::MerchantApi;
use podpublish_domain::{
    ApiConfig, Blueprint, CatalogVariant, CreatedProduct, DesignFile, PrintProvider, ProductBody,
    PublishFlags, Result, Shop, UploadImageRequest, UploadedImage, VariantsResponse,
};
use tracing::{debug, info, instrument};

use crate::http::HttpClient;

/// Printify API client
#[derive(Clone)]
pub struct PrintifyClient {
    http: HttpClient,
}

impl PrintifyClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn from_config(config: &ApiConfig, credential: Credential) -> Result<Self> {
        Ok(Self::new(HttpClient::from_config(config, credential)?))
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

#[async_trait]
impl MerchantApi for PrintifyClient {
    #[instrument(skip(self))]
    async fn list_shops(&self) -> Result<Vec<Shop>> {
        let shops: Vec<Shop> = self.http.get_json("/shops.json", &[]).await?;
        debug!(count = shops.len(), "Shops listed");
        Ok(shops)
    }

    #[instrument(skip(self))]
    async fn list_blueprints(&self) -> Result<Vec<Blueprint>> {
        self.http.get_json("/catalog/blueprints.json", &[]).await
    }

    #[instrument(skip(self))]
    async fn list_print_providers(&self, blueprint_id: u64) -> Result<Vec<PrintProvider>> {
        self.http
            .get_json(&format!("/catalog/blueprints/{blueprint_id}/print_providers.json"), &[])
            .await
    }

    #[instrument(skip(self))]
    async fn list_variants(
        &self,
        blueprint_id: u64,
        provider_id: u64,
        include_out_of_stock: bool,
    ) -> Result<Vec<CatalogVariant>> {
        let path = format!(
            "/catalog/blueprints/{blueprint_id}/print_providers/{provider_id}/variants.json"
        );
        let query: &[(&str, &str)] =
            if include_out_of_stock { &[("show-out-of-stock", "1")] } else { &[] };

        let response: VariantsResponse = self.http.get_json(&path, query).await?;
        Ok(response.into_variants())
    }

    #[instrument(skip(self, file), fields(file = %file.file_name, bytes = file.bytes.len()))]
    async fn upload_image(&self, file: &DesignFile) -> Result<UploadedImage> {
        let request = UploadImageRequest {
            file_name: file.file_name.clone(),
            contents: STANDARD.encode(&file.bytes),
        };
        let image: UploadedImage = self.http.post_json("/uploads/images.json", &request).await?;
        info!(image_id = %image.id, "Image uploaded");
        Ok(image)
    }

    #[instrument(skip(self, body), fields(title = %body.title, variants = body.variants.len()))]
    async fn create_product(&self, shop_id: u64, body: &ProductBody) -> Result<CreatedProduct> {
        let product: CreatedProduct =
            self.http.post_json(&format!("/shops/{shop_id}/products.json"), body).await?;
        info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self, flags))]
    async fn publish_product(
        &self,
        shop_id: u64,
        product_id: &str,
        flags: &PublishFlags,
    ) -> Result<()> {
        // The vendor answers with an empty body on success.
        self.http
            .post(&format!("/shops/{shop_id}/products/{product_id}/publish.json"), flags)
            .await?;
        info!("Product published");
        Ok(())
    }
}
