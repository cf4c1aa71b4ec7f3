//! Product construction and the batch publish workflow

pub mod product;
mod service;

pub use product::build_product_body;
pub use service::{PublishService, ShopSession};
