//! In-memory mock for the `MerchantApi` port

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use podpublish_core::MerchantApi;
use podpublish_domain::{
    Blueprint, CatalogVariant, CreatedProduct, DesignFile, PrintProvider, ProductBody,
    PublishError, PublishFlags, Result as DomainResult, Shop, UploadedImage,
};
use serde_json::json;

/// Scripted merchant API that records every call it receives.
///
/// Created products get ids `prod-1`, `prod-2`, ... in call order.
#[derive(Default)]
pub struct MockMerchantApi {
    shops: Vec<Shop>,
    shops_error: Option<PublishError>,
    providers: Vec<PrintProvider>,
    variants: Vec<CatalogVariant>,
    upload_failures: HashMap<String, PublishError>,
    create_failures: HashMap<String, PublishError>,
    publish_failures: HashMap<String, PublishError>,
    calls: Mutex<Vec<String>>,
    created: Mutex<Vec<ProductBody>>,
}

impl MockMerchantApi {
    /// One shop, Monster Digital on blueprint 145, Black/White in S-XL
    /// with White XL out of stock.
    pub fn gildan() -> Self {
        let variants = serde_json::from_value(json!([
            {"id": 101, "title": "Black / S", "options": {"color": "Black", "size": "S"}},
            {"id": 102, "title": "Black / M", "options": {"color": "Black", "size": "M"}},
            {"id": 103, "title": "Black / XL", "options": {"color": "Black", "size": "XL"}},
            {"id": 201, "title": "White / S", "options": {"color": {"title": "White"}, "size": "S"}},
            {"id": 203, "title": "White / XL", "options": {"color": "White", "size": "XL"}, "is_available": false},
            {"id": 301, "title": "Heather / 5XL", "options": {"color": "Heather", "size": "5XL"}},
        ]))
        .unwrap();

        Self {
            shops: vec![
                Shop { id: 5432, title: "Tees Inc".into(), sales_channel: Some("etsy".into()) },
                Shop { id: 7777, title: "Backup".into(), sales_channel: None },
            ],
            providers: vec![
                PrintProvider { id: 3, title: "SwiftPOD".into() },
                PrintProvider { id: 29, title: "Monster Digital".into() },
            ],
            variants,
            ..Self::default()
        }
    }

    pub fn with_shops(mut self, shops: Vec<Shop>) -> Self {
        self.shops = shops;
        self
    }

    pub fn failing_shops(mut self, error: PublishError) -> Self {
        self.shops_error = Some(error);
        self
    }

    pub fn fail_upload(mut self, file_name: &str, error: PublishError) -> Self {
        self.upload_failures.insert(file_name.to_string(), error);
        self
    }

    /// Fail creation of the product whose title starts with `stem`.
    pub fn fail_create(mut self, stem: &str, error: PublishError) -> Self {
        self.create_failures.insert(stem.to_string(), error);
        self
    }

    pub fn fail_publish(mut self, product_id: &str, error: PublishError) -> Self {
        self.publish_failures.insert(product_id.to_string(), error);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_starting_with(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|call| call.starts_with(prefix)).count()
    }

    pub fn created(&self) -> Vec<ProductBody> {
        self.created.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MerchantApi for MockMerchantApi {
    async fn list_shops(&self) -> DomainResult<Vec<Shop>> {
        self.record("list_shops".into());
        match &self.shops_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.shops.clone()),
        }
    }

    async fn list_blueprints(&self) -> DomainResult<Vec<Blueprint>> {
        self.record("list_blueprints".into());
        Ok(Vec::new())
    }

    async fn list_print_providers(&self, blueprint_id: u64) -> DomainResult<Vec<PrintProvider>> {
        self.record(format!("list_print_providers:{blueprint_id}"));
        Ok(self.providers.clone())
    }

    async fn list_variants(
        &self,
        blueprint_id: u64,
        provider_id: u64,
        include_out_of_stock: bool,
    ) -> DomainResult<Vec<CatalogVariant>> {
        self.record(format!("list_variants:{blueprint_id}:{provider_id}:{include_out_of_stock}"));
        Ok(self.variants.clone())
    }

    async fn upload_image(&self, file: &DesignFile) -> DomainResult<UploadedImage> {
        self.record(format!("upload_image:{}", file.file_name));
        if let Some(error) = self.upload_failures.get(&file.file_name) {
            return Err(error.clone());
        }
        Ok(UploadedImage {
            id: format!("img-{}", file.stem()),
            file_name: Some(file.file_name.clone()),
            preview_url: None,
        })
    }

    async fn create_product(&self, shop_id: u64, body: &ProductBody) -> DomainResult<CreatedProduct> {
        self.record(format!("create_product:{shop_id}"));
        if let Some((_, error)) =
            self.create_failures.iter().find(|(stem, _)| body.title.starts_with(stem.as_str()))
        {
            return Err(error.clone());
        }
        let mut created = self.created.lock().unwrap();
        created.push(body.clone());
        Ok(CreatedProduct { id: format!("prod-{}", created.len()), title: body.title.clone() })
    }

    async fn publish_product(
        &self,
        shop_id: u64,
        product_id: &str,
        _flags: &PublishFlags,
    ) -> DomainResult<()> {
        self.record(format!("publish_product:{shop_id}:{product_id}"));
        match self.publish_failures.get(product_id) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
