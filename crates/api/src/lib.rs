//! # podpublish App
//!
//! Command-line application layer.
//!
//! This crate contains:
//! - The clap command tree and flag-to-config mapping
//! - Application context (dependency wiring)
//! - Command handlers and user-facing report rendering
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires the Printify adapter into the publish service
//! - The only crate that writes to the terminal

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use cli::Cli;
pub use commands::run;
pub use context::AppContext;
