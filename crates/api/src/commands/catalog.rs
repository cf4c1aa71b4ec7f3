//! Catalog browsing commands

use std::io::Write;

use anyhow::Context;
use podpublish_core::catalog::resolve_provider;
use podpublish_domain::Blueprint;

use crate::context::AppContext;
use crate::utils::report;

pub async fn blueprints(
    ctx: &AppContext,
    search: Option<&str>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let all = ctx.api.list_blueprints().await.context("Listing blueprints")?;
    let shown: Vec<&Blueprint> = match search {
        Some(needle) => all.iter().filter(|blueprint| blueprint.matches(needle)).collect(),
        None => all.iter().collect(),
    };

    report::write_blueprints(out, &shown)?;
    Ok(())
}

/// List providers and mark the one the current selection resolves to.
pub async fn providers(ctx: &AppContext, out: &mut dyn Write) -> anyhow::Result<()> {
    let publish = &ctx.config.publish;
    let providers = ctx
        .api
        .list_print_providers(publish.blueprint_id)
        .await
        .with_context(|| format!("Listing print providers for blueprint {}", publish.blueprint_id))?;

    let selected = resolve_provider(&providers, &publish.provider_selector(), publish.blueprint_id)
        .ok()
        .map(|provider| provider.id);
    report::write_providers(out, publish.blueprint_id, &providers, selected)?;
    Ok(())
}

pub async fn variants(ctx: &AppContext, out: &mut dyn Write) -> anyhow::Result<()> {
    let selection = ctx.service.load_catalog().await.context("Loading catalog variants")?;
    writeln!(
        out,
        "Blueprint {} via {} (#{}):",
        selection.blueprint_id, selection.provider.title, selection.provider.id
    )?;
    report::write_variants(out, &selection.variants)?;
    Ok(())
}

pub async fn colors(ctx: &AppContext, out: &mut dyn Write) -> anyhow::Result<()> {
    let selection = ctx.service.load_catalog().await.context("Loading catalog colors")?;
    report::write_colors(out, &ctx.config.publish.sizes, &selection.available_colors)?;
    Ok(())
}
