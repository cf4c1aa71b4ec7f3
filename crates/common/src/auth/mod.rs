//! Merchant API credential handling
//!
//! Users paste tokens copied from dashboards, password managers and terminal
//! snippets, so the raw text routinely carries a `Bearer ` scheme, wrapping
//! quotes, line breaks or invisible zero-width characters. This module turns
//! that text into the literal value expected after `Authorization: Bearer`
//! and provides display-safe views of it.
//!
//! ```text
//! raw paste ──► normalize_token ──► Credential ──► authorization header
//!                                       │
//!                                       ├──► mask_token        (preview)
//!                                       └──► token_fingerprint (correlation id)
//! ```
//!
//! Neither the mask nor the fingerprint can be reversed into the token.

pub mod credential;
pub mod token;

pub use credential::Credential;
pub use token::{mask_token, normalize_token, token_fingerprint, ZERO_WIDTH_CHARS};
