//! Outcome of one logical HTTP call

use podpublish_domain::{PublishError, Result};
use serde::de::DeserializeOwned;

use crate::errors::InfraError;

/// How a finished call should be treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallClass {
    Success,
    /// HTTP 429 after the retry budget was spent.
    RateLimited,
    Failure,
}

impl CallClass {
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => Self::Success,
            429 => Self::RateLimited,
            _ => Self::Failure,
        }
    }
}

/// Final status and body of a call after any retries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResult {
    pub status: u16,
    pub body: String,
    /// Attempts made, including the first.
    pub attempts: u32,
    pub class: CallClass,
}

impl CallResult {
    pub fn new(status: u16, body: String, attempts: u32) -> Self {
        Self { status, body, attempts, class: CallClass::from_status(status) }
    }

    pub fn is_success(&self) -> bool {
        self.class == CallClass::Success
    }

    /// Body of a successful call, or the matching [`PublishError`].
    pub fn into_body(self) -> Result<String> {
        match self.class {
            CallClass::Success => Ok(self.body),
            CallClass::RateLimited | CallClass::Failure => {
                Err(PublishError::from_status(self.status, &self.body, self.attempts))
            }
        }
    }

    /// Deserialize the body of a successful call.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.into_body()?;
        serde_json::from_str(&body).map_err(|err| InfraError::from(err).into())
    }
}

#[cfg(test)]
mod tests {
    use podpublish_domain::{ErrorKind, ResponseDetail, Shop};

    use super::*;

    #[test]
    fn classifies_statuses() {
        assert_eq!(CallClass::from_status(200), CallClass::Success);
        assert_eq!(CallClass::from_status(204), CallClass::Success);
        assert_eq!(CallClass::from_status(429), CallClass::RateLimited);
        assert_eq!(CallClass::from_status(404), CallClass::Failure);
        assert_eq!(CallClass::from_status(503), CallClass::Failure);
    }

    #[test]
    fn rate_limited_result_keeps_attempts() {
        let err = CallResult::new(429, "slow down".into(), 3).into_body().unwrap_err();
        assert_eq!(
            err,
            PublishError::RateLimited { attempts: 3, detail: ResponseDetail::Text("slow down".into()) }
        );
    }

    #[test]
    fn failure_maps_status() {
        let err = CallResult::new(401, r#"{"error":"Unauthenticated."}"#.into(), 1)
            .into_body()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Credential);
    }

    #[test]
    fn json_bodies_deserialize() {
        let shops: Vec<Shop> =
            CallResult::new(200, r#"[{"id": 1, "title": "A"}]"#.into(), 1).into_json().unwrap();
        assert_eq!(shops[0].id, 1);

        let err = CallResult::new(200, "<html>".into(), 1).into_json::<Vec<Shop>>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
