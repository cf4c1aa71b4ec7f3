//! Command-line interface definition
//!
//! Flags map onto [`PublishConfig`] fields and are applied after the config
//! file and `PODPUBLISH_*` environment overrides, so they always win.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use podpublish_domain::PublishConfig;

use crate::utils::logging::LogFormat;

/// podpublish - publish design images as Printify products
///
/// Uploads each design, creates a product from the selected blueprint,
/// provider, colors and sizes, then publishes it to the connected shop.
#[derive(Parser, Debug)]
#[command(name = "podpublish", author, version, about = "Publish design images as Printify products")]
pub struct Cli {
    /// Config file (TOML or JSON); probed in the working directory when absent
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Printify merchant API token; prompted for when absent
    #[arg(long, global = true, env = "PRINTIFY_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Log level or filter directive (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "PODPUBLISH_LOG", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the token against the shops endpoint
    Verify,

    /// List shops linked to the token
    Shops,

    /// List catalog blueprints
    Blueprints {
        /// Only show blueprints whose title, brand or model contains TEXT
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,
    },

    /// List print providers for a blueprint
    Providers {
        #[arg(long, value_name = "ID")]
        blueprint: Option<u64>,
    },

    /// List the selected provider's variants
    Variants(SelectionArgs),

    /// List colors offered in the wanted sizes
    Colors(SelectionArgs),

    /// Upload, create and publish one product per design file
    Publish(PublishArgs),
}

/// Catalog selection flags shared by `variants`, `colors` and `publish`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionArgs {
    /// Catalog blueprint id
    #[arg(long, value_name = "ID")]
    pub blueprint: Option<u64>,

    /// Print provider title (case-insensitive)
    #[arg(long, value_name = "NAME", conflicts_with = "provider_id")]
    pub provider: Option<String>,

    /// Print provider id
    #[arg(long, value_name = "ID")]
    pub provider_id: Option<u64>,

    /// Include out-of-stock variants
    #[arg(long)]
    pub include_oos: bool,

    /// Wanted sizes (repeatable or comma-separated)
    #[arg(long = "size", value_name = "SIZE", value_delimiter = ',')]
    pub sizes: Vec<String>,
}

impl SelectionArgs {
    pub fn apply(&self, config: &mut PublishConfig) {
        if let Some(blueprint) = self.blueprint {
            config.blueprint_id = blueprint;
        }
        if let Some(name) = &self.provider {
            config.provider_name = name.clone();
            config.provider_id = None;
        }
        if let Some(id) = self.provider_id {
            config.provider_id = Some(id);
        }
        if self.include_oos {
            config.include_out_of_stock = true;
        }
        if !self.sizes.is_empty() {
            config.sizes = self.sizes.clone();
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PublishArgs {
    /// Design images (PNG/JPG) or directories containing them
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Colors to publish (repeatable or comma-separated); all available when omitted
    #[arg(long = "color", value_name = "COLOR", value_delimiter = ',')]
    pub colors: Vec<String>,

    /// Variant price in cents
    #[arg(long, value_name = "CENTS")]
    pub price: Option<u32>,

    /// Target shop id; the first linked shop when omitted
    #[arg(long, value_name = "ID")]
    pub shop: Option<u64>,

    /// Resolve the selection and show planned products without uploading
    #[arg(long)]
    pub dry_run: bool,
}

impl PublishArgs {
    pub fn apply(&self, config: &mut PublishConfig) {
        self.selection.apply(config);
        if !self.colors.is_empty() {
            config.colors = Some(self.colors.clone());
        }
        if let Some(price) = self.price {
            config.price_cents = price;
        }
        if let Some(shop) = self.shop {
            config.shop_id = Some(shop);
        }
    }
}

impl Command {
    /// Stable command name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Verify => "verify",
            Self::Shops => "shops",
            Self::Blueprints { .. } => "blueprints",
            Self::Providers { .. } => "providers",
            Self::Variants(_) => "variants",
            Self::Colors(_) => "colors",
            Self::Publish(_) => "publish",
        }
    }

    /// Layer this command's flags over the loaded configuration.
    pub fn apply(&self, config: &mut PublishConfig) {
        match self {
            Self::Verify | Self::Shops | Self::Blueprints { .. } => {}
            Self::Providers { blueprint } => {
                if let Some(blueprint) = blueprint {
                    config.blueprint_id = *blueprint;
                }
            }
            Self::Variants(selection) | Self::Colors(selection) => selection.apply(config),
            Self::Publish(args) => args.apply(config),
        }
    }
}
