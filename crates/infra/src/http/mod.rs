//! Resilient HTTP access to the vendor API
//!
//! [`HttpClient`] sends authenticated JSON requests and retries only on
//! HTTP 429, waiting `step × attempt` between tries. Every other failure is
//! returned on the first attempt.

pub mod call;
pub mod client;

pub use call::{CallClass, CallResult};
pub use client::{HttpClient, HttpClientBuilder};
