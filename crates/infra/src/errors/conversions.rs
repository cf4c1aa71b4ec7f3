//! Conversions from external infrastructure errors into domain errors.

use podpublish_domain::PublishError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use std::io::Error as IoError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PublishError);

impl From<InfraError> for PublishError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PublishError> for InfraError {
    fn from(value: PublishError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoPublishError {
    fn into_publish_error(self) -> PublishError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PublishError */
/* -------------------------------------------------------------------------- */

impl IntoPublishError for HttpError {
    fn into_publish_error(self) -> PublishError {
        if self.is_timeout() {
            return PublishError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return PublishError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return PublishError::Config(format!("Invalid HTTP request: {self}"));
        }

        if self.is_decode() {
            return PublishError::Decode(self.to_string());
        }

        if let Some(status) = self.status() {
            return PublishError::from_status(status.as_u16(), "", 1);
        }

        PublishError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_publish_error())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → PublishError */
/* -------------------------------------------------------------------------- */

impl IntoPublishError for JsonError {
    fn into_publish_error(self) -> PublishError {
        PublishError::Decode(format!("Failed to parse response: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_publish_error())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → PublishError */
/* -------------------------------------------------------------------------- */

impl IntoPublishError for IoError {
    fn into_publish_error(self) -> PublishError {
        PublishError::Io(self.to_string())
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_publish_error())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
