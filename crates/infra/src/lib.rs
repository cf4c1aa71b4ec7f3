//! # podpublish Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The rate-limit aware HTTP caller
//! - The Printify merchant API adapter
//! - Configuration loading (file + environment)
//! - Design file discovery on disk
//!
//! ## Architecture
//! - Implements traits defined in `podpublish-core`
//! - Depends on `podpublish-common` and `podpublish-domain`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod designs;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::PrintifyClient;
pub use designs::{collect_design_paths, load_design_files};
pub use errors::InfraError;
pub use http::{CallClass, CallResult, HttpClient, HttpClientBuilder};
