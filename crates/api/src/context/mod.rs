//! Application context - dependency injection container

use std::io::IsTerminal;
use std::sync::Arc;

use podpublish_common::Credential;
use podpublish_core::{MerchantApi, PublishService};
use podpublish_domain::{AppConfig, PublishError, Result};
use podpublish_infra::PrintifyClient;
use tracing::info;

const TOKEN_PROMPT: &str = "Printify merchant API token: ";

/// Application context - holds the configuration and wired services
pub struct AppContext {
    pub config: AppConfig,
    pub credential: Credential,
    pub api: Arc<dyn MerchantApi>,
    pub service: PublishService,
}

impl AppContext {
    /// Wire the Printify adapter for `config` and `credential`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (invalid base
    /// URL, or a token that cannot be sent as a header).
    pub fn new(config: AppConfig, credential: Credential) -> Result<Self> {
        let client = PrintifyClient::from_config(&config.api, credential.clone())?;
        info!(base_url = %client.http().base_url(), credential = %credential, "Printify client ready");
        Ok(Self::with_api(config, credential, Arc::new(client)))
    }

    /// Build a context around an existing [`MerchantApi`] implementation.
    pub fn with_api(config: AppConfig, credential: Credential, api: Arc<dyn MerchantApi>) -> Self {
        let service = PublishService::new(Arc::clone(&api), config.publish.clone());
        Self { config, credential, api, service }
    }
}

/// Resolve the token: the supplied value (flag or `PRINTIFY_API_TOKEN`),
/// otherwise a hidden prompt when stdin is a terminal.
///
/// # Errors
/// `MissingCredential` when nothing usable was supplied, including a value
/// that normalizes to empty.
pub fn resolve_credential(supplied: Option<&str>) -> Result<Credential> {
    let raw = match supplied {
        Some(raw) => raw.to_string(),
        None if std::io::stdin().is_terminal() => rpassword::prompt_password(TOKEN_PROMPT)
            .map_err(|err| PublishError::Io(format!("Failed to read token: {err}")))?,
        None => return Err(PublishError::MissingCredential),
    };

    Credential::from_raw(&raw).ok_or(PublishError::MissingCredential)
}
