//! # podpublish Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The [`MerchantApi`] port implemented by the HTTP adapter
//! - Catalog selection rules (provider, variants, colors, sizes)
//! - Product body construction and the batch publish service
//!
//! ## Architecture Principles
//! - Only depends on `podpublish-common` and `podpublish-domain`
//! - No HTTP or filesystem code
//! - All vendor access via the [`MerchantApi`] trait

pub mod catalog;
pub mod ports;
pub mod publish;

pub use catalog::CatalogSelection;
pub use ports::MerchantApi;
pub use publish::{PublishService, ShopSession};
