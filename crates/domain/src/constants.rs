//! Application constants
//!
//! Defaults backing the configuration structures in [`crate::config`] and
//! the fixed vocabulary of the vendor API.

// Vendor API
pub const DEFAULT_API_BASE_URL: &str = "https://api.printify.com/v1";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BACKOFF_MS: u64 = 1250;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("podpublish/", env!("CARGO_PKG_VERSION"));

// Catalog selection (Gildan 64000 via Monster Digital)
pub const DEFAULT_BLUEPRINT_ID: u64 = 145;
pub const DEFAULT_PROVIDER_NAME: &str = "Monster Digital";
pub const DEFAULT_PRICE_CENTS: u32 = 2999;
pub const DEFAULT_SIZES: [&str; 6] = ["S", "M", "L", "XL", "2XL", "3XL"];
pub const DEFAULT_TITLE_SUFFIX: &str = " - Gildan 64000";
pub const DEFAULT_PRODUCT_LABEL: &str = "Gildan 64000 T-Shirt";

// Artwork placement, relative to the print area
pub const DEFAULT_PLACEHOLDER_POSITION: &str = "front";
pub const DEFAULT_IMAGE_X: f64 = 0.5;
pub const DEFAULT_IMAGE_Y: f64 = 0.5;
pub const DEFAULT_IMAGE_SCALE: f64 = 0.9;
pub const DEFAULT_IMAGE_ANGLE: f64 = 0.0;

/// Garment sizes in display order; unknown sizes sort after these.
pub const SIZE_ORDER: [&str; 9] = ["XS", "S", "M", "L", "XL", "2XL", "3XL", "4XL", "5XL"];

/// Image extensions accepted for upload.
pub const DESIGN_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Token environment variable consulted by the CLI.
pub const TOKEN_ENV_VAR: &str = "PRINTIFY_API_TOKEN";
