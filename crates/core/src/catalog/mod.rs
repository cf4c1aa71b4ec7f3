//! Catalog selection rules
//!
//! Turns the vendor's provider and variant listings into the set of variants
//! a product is created with.

mod sizes;

use std::collections::BTreeSet;

use podpublish_domain::{
    CatalogVariant, PrintProvider, ProviderSelector, PublishError, Result, VariantOption,
};
use serde::Serialize;

pub use sizes::{size_rank, sort_sizes};

/// Catalog state captured once per run and shared by every file in a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSelection {
    pub blueprint_id: u64,
    pub provider: PrintProvider,
    /// All normalized variants returned by the catalog.
    pub variants: Vec<VariantOption>,
    /// Colors offered for the wanted sizes.
    pub available_colors: Vec<String>,
    /// Variants every product in the batch is created with.
    pub chosen: Vec<VariantOption>,
}

impl CatalogSelection {
    pub fn chosen_ids(&self) -> Vec<u64> {
        self.chosen.iter().map(|variant| variant.id).collect()
    }

    /// Sizes of the chosen variants in display order.
    pub fn chosen_sizes(&self) -> Vec<String> {
        sort_sizes(self.chosen.iter().map(|variant| variant.size.as_str()))
    }

    /// Sorted colors of the chosen variants.
    pub fn chosen_colors(&self) -> Vec<String> {
        let colors: BTreeSet<&str> = self.chosen.iter().map(|variant| variant.color.as_str()).collect();
        colors.into_iter().map(str::to_string).collect()
    }
}

/// Pick a print provider by id, or by title ignoring case.
pub fn resolve_provider(
    providers: &[PrintProvider],
    selector: &ProviderSelector,
    blueprint_id: u64,
) -> Result<PrintProvider> {
    let found = match selector {
        ProviderSelector::Id(id) => providers.iter().find(|provider| provider.id == *id),
        ProviderSelector::Name(name) => {
            let wanted = name.trim().to_lowercase();
            providers.iter().find(|provider| provider.title.trim().to_lowercase() == wanted)
        }
    };

    found.cloned().ok_or_else(|| PublishError::ProviderNotFound {
        provider: selector.to_string(),
        blueprint_id,
        available: providers.iter().map(|provider| provider.title.clone()).collect(),
    })
}

/// Resolve size and color for each raw variant.
///
/// Size comes from the `size` option, then a top-level `size` field, then
/// the last ` / ` segment of the title. Color only comes from the `color`
/// option. Variants missing either are dropped.
pub fn normalize_variants(raw: &[CatalogVariant]) -> Vec<VariantOption> {
    raw.iter()
        .filter_map(|variant| {
            let size = variant_size(variant)?;
            let color = variant.option_label("color")?;
            Some(VariantOption {
                id: variant.id,
                size: size.to_string(),
                color: color.to_string(),
                is_available: variant.is_available.unwrap_or(true),
            })
        })
        .collect()
}

fn variant_size(variant: &CatalogVariant) -> Option<&str> {
    if let Some(size) = variant.option_label("size") {
        return Some(size);
    }
    if let Some(size) = variant.size.as_deref().map(str::trim).filter(|size| !size.is_empty()) {
        return Some(size);
    }
    variant.title.rsplit(" / ").next().map(str::trim).filter(|size| !size.is_empty())
}

fn wants(list: &[String], value: &str) -> bool {
    list.iter().any(|item| item.eq_ignore_ascii_case(value))
}

/// Sorted, deduplicated colors offered in any wanted size.
pub fn available_colors(
    variants: &[VariantOption],
    sizes: &[String],
    include_out_of_stock: bool,
) -> Vec<String> {
    let colors: BTreeSet<&str> = variants
        .iter()
        .filter(|variant| wants(sizes, &variant.size))
        .filter(|variant| include_out_of_stock || variant.is_available)
        .map(|variant| variant.color.as_str())
        .collect();
    colors.into_iter().map(str::to_string).collect()
}

/// Variants in a wanted size and selected color that are in stock.
///
/// Out-of-stock variants are never chosen, even when they were shown while
/// planning.
pub fn choose_variants(
    variants: &[VariantOption],
    sizes: &[String],
    colors: &[String],
) -> Result<Vec<VariantOption>> {
    let chosen: Vec<VariantOption> = variants
        .iter()
        .filter(|variant| variant.is_available)
        .filter(|variant| wants(sizes, &variant.size) && wants(colors, &variant.color))
        .cloned()
        .collect();

    if chosen.is_empty() {
        return Err(PublishError::NoMatchingVariants);
    }
    Ok(chosen)
}
