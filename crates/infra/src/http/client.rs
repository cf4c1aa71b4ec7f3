use std::sync::Arc;
use std::time::Duration;

use podpublish_common::resilience::{
    RetryConfig, RetryDecision, RetryError, RetryExecutor, RetryPolicy, Sleeper, TokioSleeper,
};
use podpublish_common::Credential;
use podpublish_domain::{ApiConfig, PublishError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use url::Url;

use super::call::{CallClass, CallResult};
use crate::errors::InfraError;

/// A single failed attempt, before the retry policy has looked at it.
#[derive(Debug)]
enum AttemptError {
    Status { status: u16, body: String },
    Transport(PublishError),
}

/// Retries HTTP 429 and nothing else.
///
/// Transport failures are not retried: a write that timed out may already
/// have been applied by the server.
#[derive(Debug, Clone, Copy, Default)]
struct RateLimitPolicy;

impl RetryPolicy<AttemptError> for RateLimitPolicy {
    fn should_retry(&self, error: &AttemptError, _attempt: u32) -> RetryDecision {
        match error {
            AttemptError::Status { status: 429, .. } => RetryDecision::Retry,
            _ => RetryDecision::Stop,
        }
    }
}

/// Authenticated JSON client for the vendor API with rate-limit retries.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    base_url: String,
    executor: Arc<RetryExecutor<RateLimitPolicy, Arc<dyn Sleeper>>>,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Client configured from [`ApiConfig`] that sleeps on the tokio timer.
    pub fn from_config(config: &ApiConfig, credential: Credential) -> Result<Self> {
        HttpClientBuilder::from_config(config).credential(credential).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send one logical request, retrying while the server answers 429.
    ///
    /// Any HTTP status is returned as a [`CallResult`]; only transport
    /// failures are errors here.
    #[instrument(skip(self, query, body))]
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&serde_json::Value>,
    ) -> Result<CallResult> {
        let url = self.url(path);
        let mut attempt = 0u32;

        let outcome = self
            .executor
            .execute_with_outcome(|| {
                attempt += 1;
                let current = attempt;
                let method = method.clone();

                let mut request = self.client.request(method.clone(), &url);
                if !query.is_empty() {
                    request = request.query(query);
                }
                if let Some(body) = body {
                    request = request.json(body);
                }

                async move {
                    let response = request
                        .send()
                        .await
                        .map_err(|err| AttemptError::Transport(InfraError::from(err).into()))?;
                    let status = response.status().as_u16();
                    let text = response
                        .text()
                        .await
                        .map_err(|err| AttemptError::Transport(InfraError::from(err).into()))?;

                    debug!(%method, path, attempt = current, status, "HTTP attempt finished");

                    if (200..300).contains(&status) {
                        Ok((status, text))
                    } else {
                        Err(AttemptError::Status { status, body: text })
                    }
                }
            })
            .await;

        let total_delay = outcome.total_delay();
        let result = match outcome.result {
            Ok((status, text)) => CallResult::new(status, text, outcome.attempts),
            Err(
                RetryError::Exhausted { attempts, last: AttemptError::Status { status, body } }
                | RetryError::NonRetryable {
                    attempts,
                    source: AttemptError::Status { status, body },
                },
            ) => CallResult::new(status, body, attempts),
            Err(
                RetryError::Exhausted { last: AttemptError::Transport(err), .. }
                | RetryError::NonRetryable { source: AttemptError::Transport(err), .. },
            ) => {
                warn!(%method, path, error = %err, "HTTP request failed");
                return Err(err);
            }
            Err(RetryError::InvalidConfiguration { message }) => {
                return Err(PublishError::Config(message));
            }
        };

        match result.class {
            CallClass::Success => {}
            CallClass::RateLimited => warn!(
                %method,
                path,
                attempts = result.attempts,
                waited_ms = total_delay.as_millis() as u64,
                "Rate limit persisted after every retry"
            ),
            CallClass::Failure => warn!(%method, path, status = result.status, "HTTP request rejected"),
        }

        Ok(result)
    }

    /// GET and return the body of a successful response.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<String> {
        self.execute(Method::GET, path, query, None).await?.into_body()
    }

    /// POST a JSON body and return the body of a successful response.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<String> {
        let value = serde_json::to_value(body).map_err(InfraError::from)?;
        self.execute(Method::POST, path, &[], Some(&value)).await?.into_body()
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        self.execute(Method::GET, path, query, None).await?.into_json()
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = serde_json::to_value(body).map_err(InfraError::from)?;
        self.execute(Method::POST, path, &[], Some(&value)).await?.into_json()
    }
}

/// Builder for [`HttpClient`].
pub struct HttpClientBuilder {
    base_url: String,
    credential: Option<Credential>,
    timeout: Duration,
    max_attempts: u32,
    backoff_step: Duration,
    user_agent: String,
    sleeper: Arc<dyn Sleeper>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self::from_config(&ApiConfig::default())
    }
}

impl HttpClientBuilder {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            credential: None,
            timeout: Duration::from_secs(config.timeout_secs),
            max_attempts: config.effective_max_attempts(),
            backoff_step: Duration::from_millis(config.backoff_ms),
            user_agent: config.user_agent.clone(),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configure the total number of attempts (initial try + retries).
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Linear backoff step; the wait after attempt `n` is `n × step`.
    pub fn backoff_step(mut self, step: Duration) -> Self {
        self.backoff_step = step;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Replace the sleeper used between rate-limited attempts.
    pub fn sleeper(mut self, sleeper: impl Sleeper + 'static) -> Self {
        self.sleeper = Arc::new(sleeper);
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let credential = self.credential.ok_or(PublishError::MissingCredential)?;

        let base_url = self.base_url.trim().trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|err| PublishError::Config(format!("Invalid API base URL '{base_url}': {err}")))?;

        let mut authorization = HeaderValue::from_str(&credential.authorization_header())
            .map_err(|_| {
                PublishError::InvalidInput(format!(
                    "Token {} contains characters that cannot be sent in an HTTP header",
                    credential.masked()
                ))
            })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .default_headers(headers)
            .build()
            .map_err(InfraError::from)?;

        let retry = RetryConfig::builder()
            .max_attempts(self.max_attempts.max(1))
            .backoff_step(self.backoff_step)
            .build()
            .map_err(|err| PublishError::Config(format!("Invalid retry configuration: {err:?}")))?;

        debug!(
            base_url = %base_url,
            max_attempts = retry.max_attempts,
            backoff_ms = self.backoff_step.as_millis() as u64,
            credential = %credential,
            "HTTP client ready"
        );

        Ok(HttpClient {
            client,
            base_url,
            executor: Arc::new(RetryExecutor::new(retry, RateLimitPolicy).with_sleeper(self.sleeper)),
        })
    }
}
