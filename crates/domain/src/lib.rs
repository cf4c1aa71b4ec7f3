//! # podpublish Domain
//!
//! Business domain types and models for podpublish.
//!
//! This crate contains:
//! - The domain error type and Result alias
//! - Configuration structures with documented defaults
//! - Vendor wire types (shops, catalog, uploads, products, publish flags)
//! - Batch run report types
//!
//! ## Architecture
//! - Depends only on the foundation tier of `podpublish-common`
//! - No I/O; pure data and serde mappings

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
