//! Error types used throughout the application

use std::fmt;

use podpublish_common::error::{ErrorClassification, ErrorSeverity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::impl_label_conversions;

/// Response body attached to an HTTP failure.
///
/// Kept as parsed JSON when the body is valid JSON so reports can show the
/// vendor's structured error, otherwise as the raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseDetail {
    Json(serde_json::Value),
    Text(String),
}

impl ResponseDetail {
    /// Classify a response body.
    pub fn from_body(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::Text(String::new());
        }
        serde_json::from_str(body).map_or_else(|_| Self::Text(body.to_string()), Self::Json)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl fmt::Display for ResponseDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) if text.is_empty() => write!(f, "<empty body>"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Main error type for podpublish
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum PublishError {
    #[error("No merchant API token supplied")]
    MissingCredential,

    #[error("Unauthenticated (HTTP 401): the vendor rejected the token: {detail}")]
    Unauthorized { detail: ResponseDetail },

    #[error("Rate limited (HTTP 429) after {attempts} attempt(s): {detail}")]
    RateLimited { attempts: u32, detail: ResponseDetail },

    #[error("Not found (HTTP 404): {detail}")]
    NotFound { detail: ResponseDetail },

    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: ResponseDetail },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Token is valid, but no shops are linked to this account")]
    NoShops,

    #[error("Shop {0} is not linked to this account")]
    ShopNotFound(u64),

    #[error(
        "Provider '{provider}' not found for blueprint {blueprint_id}. Available: {}",
        .available.join(", ")
    )]
    ProviderNotFound { provider: String, blueprint_id: u64, available: Vec<String> },

    #[error("No available variants match the selected colors and sizes")]
    NoMatchingVariants,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type alias for podpublish operations
pub type Result<T> = std::result::Result<T, PublishError>;

/// Coarse error taxonomy used for logging labels and exit handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Credential,
    RateLimit,
    NotFound,
    Http,
    Network,
    Decode,
    Selection,
    Config,
    InvalidInput,
    Io,
}

impl_label_conversions!(ErrorKind {
    Credential => "credential",
    RateLimit => "rate_limit",
    NotFound => "not_found",
    Http => "http",
    Network => "network",
    Decode => "decode",
    Selection => "selection",
    Config => "config",
    InvalidInput => "invalid_input",
    Io => "io",
});

const UNAUTHORIZED_HINT: &str = "\
Try this checklist:
  - Generate a Merchant API token in Printify > Settings > API tokens (not an OAuth or publishable token)
  - Copy the token exactly; quotes and a leading `Bearer ` are removed automatically
  - Make sure you are logged into the Printify account that owns the shop
  - If unsure, revoke the token, create a fresh one and paste it again
Sanity check from a terminal:
  curl -sS -H \"Authorization: Bearer YOUR_TOKEN\" https://api.printify.com/v1/shops.json";

const NOT_FOUND_HINT: &str =
    "This blueprint/provider combination may not exist; choose a different catalog selection.";

impl PublishError {
    /// Map a failed HTTP status and its body to the matching variant.
    ///
    /// `attempts` is only recorded for 429 responses.
    pub fn from_status(status: u16, body: &str, attempts: u32) -> Self {
        let detail = ResponseDetail::from_body(body);
        match status {
            401 => Self::Unauthorized { detail },
            404 => Self::NotFound { detail },
            429 => Self::RateLimited { attempts, detail },
            _ => Self::Http { status, detail },
        }
    }

    /// Taxonomy bucket for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential | Self::Unauthorized { .. } => ErrorKind::Credential,
            Self::RateLimited { .. } => ErrorKind::RateLimit,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Http { .. } => ErrorKind::Http,
            Self::Network(_) => ErrorKind::Network,
            Self::Decode(_) => ErrorKind::Decode,
            Self::NoShops
            | Self::ShopNotFound(_)
            | Self::ProviderNotFound { .. }
            | Self::NoMatchingVariants => ErrorKind::Selection,
            Self::Config(_) => ErrorKind::Config,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// HTTP status carried by the error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body carried by the error, if it came from a response.
    pub fn detail(&self) -> Option<&ResponseDetail> {
        match self {
            Self::Unauthorized { detail }
            | Self::NotFound { detail }
            | Self::RateLimited { detail, .. }
            | Self::Http { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Whether the session cannot continue without a new token.
    pub fn is_credential_error(&self) -> bool {
        self.kind() == ErrorKind::Credential
    }

    /// User-facing next steps, where there is something concrete to try.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            Self::MissingCredential | Self::Unauthorized { .. } => Some(UNAUTHORIZED_HINT),
            Self::NotFound { .. } => Some(NOT_FOUND_HINT),
            _ => None,
        }
    }
}

impl ErrorClassification for PublishError {
    fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    fn severity(&self) -> ErrorSeverity {
        match self.kind() {
            ErrorKind::RateLimit | ErrorKind::NotFound | ErrorKind::Selection => {
                ErrorSeverity::Warning
            }
            _ => ErrorSeverity::Error,
        }
    }
}

impl From<std::io::Error> for PublishError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PublishError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_bodies_are_kept_structured() {
        let detail = ResponseDetail::from_body(r#"{"error":"bad blueprint","code":8150}"#);
        assert!(matches!(detail, ResponseDetail::Json(_)));
        assert_eq!(detail.to_string(), r#"{"code":8150,"error":"bad blueprint"}"#);
    }

    #[test]
    fn non_json_bodies_stay_text() {
        let detail = ResponseDetail::from_body("<html>Bad Gateway</html>");
        assert_eq!(detail, ResponseDetail::Text("<html>Bad Gateway</html>".into()));
        assert!(ResponseDetail::from_body("  ").is_empty());
        assert_eq!(ResponseDetail::from_body("").to_string(), "<empty body>");
    }

    #[test]
    fn status_mapping_follows_taxonomy() {
        assert_eq!(PublishError::from_status(401, "", 1).kind(), ErrorKind::Credential);
        assert_eq!(PublishError::from_status(404, "", 1).kind(), ErrorKind::NotFound);
        assert_eq!(PublishError::from_status(429, "", 3).kind(), ErrorKind::RateLimit);
        assert_eq!(PublishError::from_status(500, "", 1).kind(), ErrorKind::Http);
        assert_eq!(PublishError::from_status(422, "", 1).kind(), ErrorKind::Http);
    }

    #[test]
    fn status_and_detail_are_recoverable() {
        let err = PublishError::from_status(503, r#"{"message":"maintenance"}"#, 1);
        assert_eq!(err.status(), Some(503));
        assert!(err.to_string().starts_with("HTTP 503: "));
        assert!(err.to_string().contains("maintenance"));
        assert!(matches!(err.detail(), Some(ResponseDetail::Json(_))));
    }

    #[test]
    fn rate_limit_records_attempts() {
        let err = PublishError::from_status(429, "slow down", 3);
        assert_eq!(
            err,
            PublishError::RateLimited { attempts: 3, detail: ResponseDetail::Text("slow down".into()) }
        );
        assert!(err.is_retryable());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn only_rate_limits_are_retryable() {
        assert!(!PublishError::from_status(500, "", 1).is_retryable());
        assert!(!PublishError::from_status(401, "", 1).is_retryable());
        assert!(!PublishError::Network("reset".into()).is_retryable());
    }

    #[test]
    fn credential_errors_carry_checklist() {
        let err = PublishError::from_status(401, r#"{"error":"Unauthenticated."}"#, 1);
        assert!(err.is_credential_error());
        assert!(err.remediation().is_some_and(|hint| hint.contains("Merchant API token")));
        assert!(PublishError::MissingCredential.is_credential_error());
        assert!(PublishError::NoShops.remediation().is_none());
    }

    #[test]
    fn provider_not_found_lists_alternatives() {
        let err = PublishError::ProviderNotFound {
            provider: "Monster Digital".into(),
            blueprint_id: 145,
            available: vec!["SwiftPOD".into(), "Dimona Tee".into()],
        };
        assert_eq!(
            err.to_string(),
            "Provider 'Monster Digital' not found for blueprint 145. Available: SwiftPOD, Dimona Tee"
        );
        assert_eq!(err.kind(), ErrorKind::Selection);
    }

    #[test]
    fn kind_labels_round_trip() {
        assert_eq!(ErrorKind::RateLimit.to_string(), "rate_limit");
        assert_eq!("credential".parse::<ErrorKind>(), Ok(ErrorKind::Credential));
    }

    #[test]
    fn errors_serialize_with_type_tag() {
        let value = serde_json::to_value(PublishError::Network("timed out".into())).unwrap();
        assert_eq!(value, serde_json::json!({"type": "Network", "message": "timed out"}));
    }
}
