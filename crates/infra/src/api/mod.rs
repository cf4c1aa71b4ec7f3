//! Printify merchant API adapter
//!
//! Implements the `MerchantApi` port from `podpublish-core` on top of the
//! rate-limit aware [`HttpClient`](crate::http::HttpClient).

pub mod printify;

pub use printify::PrintifyClient;
