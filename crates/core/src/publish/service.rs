//! Batch publish service - core business logic

use std::sync::Arc;

use podpublish_domain::{
    BatchReport, BatchStage, DesignFile, ItemOutcome, ProductBody, PublishConfig, PublishError,
    Result, Shop,
};
use tracing::{info, instrument, warn};

use super::product::build_product_body;
use crate::catalog::{self, CatalogSelection};
use crate::ports::MerchantApi;

/// Placeholder image id used when planning without uploading.
const PENDING_IMAGE_ID: &str = "<pending-upload>";

/// Shop the batch publishes into, plus every shop the token can see
#[derive(Debug, Clone, PartialEq)]
pub struct ShopSession {
    pub shop: Shop,
    pub shops: Vec<Shop>,
}

/// Orchestrates verify, connect, catalog selection and batch publishing
pub struct PublishService {
    api: Arc<dyn MerchantApi>,
    config: PublishConfig,
}

impl PublishService {
    /// Create a new publish service
    pub fn new(api: Arc<dyn MerchantApi>, config: PublishConfig) -> Self {
        Self { api, config }
    }

    pub fn config(&self) -> &PublishConfig {
        &self.config
    }

    /// Check the token by listing shops.
    ///
    /// An empty list is still a valid token; callers decide whether that is
    /// fatal.
    #[instrument(skip(self))]
    pub async fn verify_token(&self) -> Result<Vec<Shop>> {
        let shops = self.api.list_shops().await?;
        match shops.first() {
            Some(first) => {
                info!(shop_count = shops.len(), first_shop = %first, "Token accepted");
            }
            None => warn!("Token accepted but no shops are linked"),
        }
        Ok(shops)
    }

    /// Pick the shop to publish into: the configured id, or the first shop.
    #[instrument(skip(self), fields(configured_shop = ?self.config.shop_id))]
    pub async fn connect(&self) -> Result<ShopSession> {
        let shops = self.api.list_shops().await?;
        if shops.is_empty() {
            return Err(PublishError::NoShops);
        }

        let shop = match self.config.shop_id {
            Some(id) => shops
                .iter()
                .find(|shop| shop.id == id)
                .cloned()
                .ok_or(PublishError::ShopNotFound(id))?,
            None => shops[0].clone(),
        };

        info!(shop_id = shop.id, shop_title = %shop.title, "Connected to shop");
        Ok(ShopSession { shop, shops })
    }

    /// Resolve the provider and load its normalized variants.
    ///
    /// Used on its own by the listing commands; selection failures such as
    /// an empty color list are left to [`Self::prepare_catalog`].
    #[instrument(skip(self), fields(blueprint_id = self.config.blueprint_id))]
    pub async fn load_catalog(&self) -> Result<CatalogSelection> {
        let blueprint_id = self.config.blueprint_id;
        let providers = self.api.list_print_providers(blueprint_id).await?;
        let provider =
            catalog::resolve_provider(&providers, &self.config.provider_selector(), blueprint_id)?;

        let raw = self
            .api
            .list_variants(blueprint_id, provider.id, self.config.include_out_of_stock)
            .await?;
        let variants = catalog::normalize_variants(&raw);
        let available_colors = catalog::available_colors(
            &variants,
            &self.config.sizes,
            self.config.include_out_of_stock,
        );

        info!(
            provider_id = provider.id,
            provider = %provider.title,
            raw_variants = raw.len(),
            variants = variants.len(),
            colors = available_colors.len(),
            "Catalog loaded"
        );

        Ok(CatalogSelection { blueprint_id, provider, variants, available_colors, chosen: Vec::new() })
    }

    /// Load the catalog and choose the variants every product is created
    /// with. Configured colors win; otherwise all available colors are used.
    #[instrument(skip(self, session), fields(shop_id = session.shop.id))]
    pub async fn prepare_catalog(&self, session: &ShopSession) -> Result<CatalogSelection> {
        let mut selection = self.load_catalog().await?;
        let colors = self.config.colors.as_ref().unwrap_or(&selection.available_colors);

        selection.chosen = catalog::choose_variants(&selection.variants, &self.config.sizes, colors)?;
        info!(chosen = selection.chosen.len(), "Variants chosen");
        Ok(selection)
    }

    /// Product body a file would be created with, without uploading it.
    pub fn plan_product(&self, selection: &CatalogSelection, file: &DesignFile) -> ProductBody {
        build_product_body(file.stem(), PENDING_IMAGE_ID, selection, &self.config)
    }

    /// Upload, create and publish each file in order.
    ///
    /// `on_item` sees each outcome as soon as its file is done. A failure is
    /// recorded against its file and stage and the batch moves on. Nothing
    /// already created is rolled back.
    #[instrument(skip_all, fields(shop_id = session.shop.id, files = files.len()))]
    pub async fn publish_all(
        &self,
        session: &ShopSession,
        selection: &CatalogSelection,
        files: &[DesignFile],
        mut on_item: impl FnMut(&ItemOutcome),
    ) -> BatchReport {
        let mut report = BatchReport::start();
        info!(run_id = %report.run_id, "Batch started");

        for file in files {
            let outcome = match self.publish_one(session, selection, file).await {
                Ok(outcome) => outcome,
                Err((stage, error)) => {
                    warn!(
                        file = %file.file_name,
                        stage = %stage,
                        error_kind = %error.kind(),
                        error = %error,
                        "Design failed"
                    );
                    ItemOutcome::Failed { file_name: file.file_name.clone(), stage, error }
                }
            };
            on_item(&outcome);
            report.record(outcome);
        }

        let report = report.finish();
        info!(
            run_id = %report.run_id,
            succeeded = report.succeeded(),
            failed = report.failed(),
            "Batch finished"
        );
        report
    }

    async fn publish_one(
        &self,
        session: &ShopSession,
        selection: &CatalogSelection,
        file: &DesignFile,
    ) -> std::result::Result<ItemOutcome, (BatchStage, PublishError)> {
        let shop_id = session.shop.id;

        let image = self.api.upload_image(file).await.map_err(|err| (BatchStage::Upload, err))?;

        let body = build_product_body(file.stem(), &image.id, selection, &self.config);
        let product = self
            .api
            .create_product(shop_id, &body)
            .await
            .map_err(|err| (BatchStage::Create, err))?;

        self.api
            .publish_product(shop_id, &product.id, &self.config.publish_fields)
            .await
            .map_err(|err| (BatchStage::Publish, err))?;

        info!(
            file = %file.file_name,
            product_id = %product.id,
            variants = body.variants.len(),
            "Published"
        );
        Ok(ItemOutcome::Published {
            file_name: file.file_name.clone(),
            product_id: product.id,
            title: body.title,
            variant_count: body.variants.len(),
        })
    }
}
