//! Batch run types

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::PublishError;
use crate::impl_label_conversions;

/// One design image queued for publishing
#[derive(Clone, PartialEq, Eq)]
pub struct DesignFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl DesignFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { file_name: file_name.into(), bytes }
    }

    /// File name without its extension; used as the product title stem.
    pub fn stem(&self) -> &str {
        Path::new(&self.file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.file_name)
    }
}

impl fmt::Debug for DesignFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesignFile")
            .field("file_name", &self.file_name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Step of the per-file pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStage {
    Upload,
    Create,
    Publish,
}

impl_label_conversions!(BatchStage {
    Upload => "upload",
    Create => "create",
    Publish => "publish",
});

/// Result of processing a single design file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemOutcome {
    Published { file_name: String, product_id: String, title: String, variant_count: usize },
    Failed { file_name: String, stage: BatchStage, error: PublishError },
}

impl ItemOutcome {
    pub fn file_name(&self) -> &str {
        match self {
            Self::Published { file_name, .. } | Self::Failed { file_name, .. } => file_name,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Published { .. })
    }
}

/// Outcome of one publish run over a list of files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub items: Vec<ItemOutcome>,
}

impl BatchReport {
    pub fn start() -> Self {
        Self { run_id: Uuid::now_v7(), started_at: Utc::now(), finished_at: None, items: Vec::new() }
    }

    pub fn record(&mut self, outcome: ItemOutcome) {
        self.items.push(outcome);
    }

    pub fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|item| item.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.items.len() - self.succeeded()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.items.iter().filter(|item| !item.is_success())
    }
}
