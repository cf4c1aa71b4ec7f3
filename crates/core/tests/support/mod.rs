//! Shared test helpers for `podpublish-core` integration tests.
//!
//! Provides an in-memory `MerchantApi` so service tests can focus on
//! orchestration instead of HTTP.

pub mod merchant;
