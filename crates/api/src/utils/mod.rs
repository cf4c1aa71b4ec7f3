//! Logging setup and terminal report rendering

pub mod logging;
pub mod report;
