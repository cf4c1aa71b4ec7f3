//! Configuration structures
//!
//! Every field has a serde default so partial config files only need to name
//! what they change.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::PublishFlags;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub publish: PublishConfig,
}

/// Vendor API connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Total attempts per call, including the first. Values below 1 are
    /// treated as 1.
    pub max_attempts: u32,
    /// Linear backoff step: the wait after attempt `n` is `n × backoff_ms`.
    pub backoff_ms: u64,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_ms: DEFAULT_BACKOFF_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn effective_max_attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// Catalog selection and product template settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    pub blueprint_id: u64,
    /// Explicit provider id; wins over `provider_name` when set.
    pub provider_id: Option<u64>,
    pub provider_name: String,
    /// Target shop; the first linked shop is used when unset.
    pub shop_id: Option<u64>,
    pub price_cents: u32,
    pub sizes: Vec<String>,
    /// Colors to publish; all available colors when unset.
    pub colors: Option<Vec<String>>,
    pub include_out_of_stock: bool,
    pub title_suffix: String,
    pub product_label: String,
    pub placement: PlacementConfig,
    pub publish_fields: PublishFlags,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            blueprint_id: DEFAULT_BLUEPRINT_ID,
            provider_id: None,
            provider_name: DEFAULT_PROVIDER_NAME.to_string(),
            shop_id: None,
            price_cents: DEFAULT_PRICE_CENTS,
            sizes: DEFAULT_SIZES.iter().map(|s| (*s).to_string()).collect(),
            colors: None,
            include_out_of_stock: false,
            title_suffix: DEFAULT_TITLE_SUFFIX.to_string(),
            product_label: DEFAULT_PRODUCT_LABEL.to_string(),
            placement: PlacementConfig::default(),
            publish_fields: PublishFlags::default(),
        }
    }
}

impl PublishConfig {
    /// Provider selector derived from the id/name pair.
    pub fn provider_selector(&self) -> ProviderSelector {
        match self.provider_id {
            Some(id) => ProviderSelector::Id(id),
            None => ProviderSelector::Name(self.provider_name.clone()),
        }
    }
}

/// How a print provider is picked from a blueprint's provider list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderSelector {
    Id(u64),
    /// Matched case-insensitively against the provider title.
    Name(String),
}

impl std::fmt::Display for ProviderSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Artwork placement inside the print area, in relative units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub position: String,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub angle: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            position: DEFAULT_PLACEHOLDER_POSITION.to_string(),
            x: DEFAULT_IMAGE_X,
            y: DEFAULT_IMAGE_Y,
            scale: DEFAULT_IMAGE_SCALE,
            angle: DEFAULT_IMAGE_ANGLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_gildan_template() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "https://api.printify.com/v1");
        assert_eq!(config.api.max_attempts, 3);
        assert_eq!(config.api.backoff_ms, 1250);
        assert_eq!(config.publish.blueprint_id, 145);
        assert_eq!(config.publish.provider_name, "Monster Digital");
        assert_eq!(config.publish.price_cents, 2999);
        assert_eq!(config.publish.sizes, vec!["S", "M", "L", "XL", "2XL", "3XL"]);
        assert!(!config.publish.include_out_of_stock);
        assert_eq!(config.publish.placement.scale, 0.9);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            max_attempts = 5

            [publish]
            provider_id = 29
            sizes = ["M", "L"]
            "#,
        )
        .unwrap();

        assert_eq!(config.api.max_attempts, 5);
        assert_eq!(config.api.backoff_ms, 1250);
        assert_eq!(config.publish.sizes, vec!["M", "L"]);
        assert_eq!(config.publish.blueprint_id, 145);
        assert_eq!(config.publish.provider_selector(), ProviderSelector::Id(29));
    }

    #[test]
    fn provider_name_used_without_id() {
        let config = PublishConfig::default();
        assert_eq!(
            config.provider_selector(),
            ProviderSelector::Name("Monster Digital".to_string())
        );
        assert_eq!(config.provider_selector().to_string(), "Monster Digital");
        assert_eq!(ProviderSelector::Id(3).to_string(), "#3");
    }

    #[test]
    fn zero_attempts_clamps_to_one() {
        let api = ApiConfig { max_attempts: 0, ..ApiConfig::default() };
        assert_eq!(api.effective_max_attempts(), 1);
    }
}
