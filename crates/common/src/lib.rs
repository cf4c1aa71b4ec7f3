//! Modular common utilities shared across podpublish crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: errors, token normalization and credential handling
//! - `runtime`: async infrastructure (retry executor and sleepers)
//! - `observability`: optional tracing (pulled in by `runtime`)
//! - `test-utils`: recording sleepers and assertion helpers for tests

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod auth;
#[cfg(feature = "foundation")]
pub mod error;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod resilience;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", all(test, feature = "runtime")))]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use auth::{mask_token, normalize_token, token_fingerprint, Credential};
#[cfg(feature = "foundation")]
pub use error::{ErrorClassification, ErrorSeverity};
#[cfg(feature = "runtime")]
pub use resilience::{
    RetryConfig, RetryConfigBuilder, RetryDecision, RetryError, RetryExecutor, RetryOutcome,
    RetryPolicy, RetryResult, Sleeper, TokioSleeper,
};
