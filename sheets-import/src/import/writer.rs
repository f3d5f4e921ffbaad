//! Destinations for built row batches

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};

use crate::api::AppendSummary;

/// Appends a batch of rows after the existing content of a range
#[async_trait]
pub trait SheetWriter: Send + Sync {
    async fn append(&self, range: &str, rows: &[Vec<String>]) -> Result<AppendSummary>;
}

/// Logs batches instead of sending them
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunWriter;

#[async_trait]
impl SheetWriter for DryRunWriter {
    async fn append(&self, range: &str, rows: &[Vec<String>]) -> Result<AppendSummary> {
        info!("[dry run] would append {} rows to {}", rows.len(), range);
        for row in rows {
            debug!("[dry run] {} <- {}", range, serde_json::to_string(row)?);
        }

        Ok(AppendSummary {
            range: range.to_string(),
            updated_range: None,
            updated_rows: rows.len() as u64,
        })
    }
}
