//! Batch publish command

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use podpublish_domain::ItemOutcome;
use podpublish_infra::load_design_files;
use tracing::info;

use crate::context::AppContext;
use crate::utils::report;

/// Publish every design in `files`.
///
/// Setup failures (designs, shop, catalog) abort before anything is
/// uploaded. Each file's outcome is written as soon as it finishes, and
/// the command fails at the end naming every file that failed.
pub async fn publish(
    ctx: &AppContext,
    files: &[PathBuf],
    dry_run: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let designs = load_design_files(files).context("Loading design files")?;
    let session = ctx.service.connect().await.context("Connecting to shop")?;
    writeln!(out, "Shop: {}", session.shop)?;

    let selection =
        ctx.service.prepare_catalog(&session).await.context("Selecting catalog variants")?;
    report::write_selection(out, &selection)?;

    if dry_run {
        for design in &designs {
            let body = ctx.service.plan_product(&selection, design);
            report::write_plan(out, &design.file_name, &body)?;
        }
        info!(files = designs.len(), "Dry run complete; nothing uploaded");
        return Ok(());
    }

    let mut written = Ok(());
    let batch = ctx
        .service
        .publish_all(&session, &selection, &designs, |item| {
            if written.is_ok() {
                written = report::write_outcome(out, item);
            }
        })
        .await;
    written?;
    report::write_batch_summary(out, &batch)?;

    if !batch.is_complete_success() {
        let failed: Vec<&str> = batch.failures().map(ItemOutcome::file_name).collect();
        bail!(
            "{} of {} design(s) failed to publish: {}",
            failed.len(),
            batch.items.len(),
            failed.join(", ")
        );
    }
    Ok(())
}
