//! Plain-text rendering of command results
//!
//! Every writer takes `&mut dyn Write` so commands can print to stdout and
//! tests can render into a buffer.

use std::io::{self, Write};

use podpublish_common::Credential;
use podpublish_core::catalog::sort_sizes;
use podpublish_core::CatalogSelection;
use podpublish_domain::{
    BatchReport, Blueprint, ItemOutcome, PrintProvider, ProductBody, Shop, VariantOption,
};

use super::logging::find_publish_error;

pub fn write_credential(out: &mut dyn Write, credential: &Credential) -> io::Result<()> {
    writeln!(out, "Using token {credential}")
}

pub fn write_shops(out: &mut dyn Write, shops: &[Shop]) -> io::Result<()> {
    if shops.is_empty() {
        return writeln!(out, "No shops linked to this token.");
    }
    for shop in shops {
        writeln!(out, "  {shop}")?;
    }
    Ok(())
}

pub fn write_blueprints(out: &mut dyn Write, blueprints: &[&Blueprint]) -> io::Result<()> {
    for blueprint in blueprints {
        let maker = match (&blueprint.brand, &blueprint.model) {
            (Some(brand), Some(model)) => format!(" [{brand} {model}]"),
            (Some(brand), None) => format!(" [{brand}]"),
            (None, Some(model)) => format!(" [{model}]"),
            (None, None) => String::new(),
        };
        writeln!(out, "{:>6}  {}{maker}", blueprint.id, blueprint.title)?;
    }
    writeln!(out, "{} blueprint(s)", blueprints.len())
}

/// Providers for a blueprint; `selected` is marked with `*`.
pub fn write_providers(
    out: &mut dyn Write,
    blueprint_id: u64,
    providers: &[PrintProvider],
    selected: Option<u64>,
) -> io::Result<()> {
    writeln!(out, "Print providers for blueprint {blueprint_id}:")?;
    for provider in providers {
        let marker = if Some(provider.id) == selected { '*' } else { ' ' };
        writeln!(out, "{marker} {:>5}  {}", provider.id, provider.title)?;
    }
    Ok(())
}

pub fn write_variants(out: &mut dyn Write, variants: &[VariantOption]) -> io::Result<()> {
    for variant in variants {
        let stock = if variant.is_available { "" } else { "  (out of stock)" };
        writeln!(out, "{:>8}  {:<24} {:<5}{stock}", variant.id, variant.color, variant.size)?;
    }
    writeln!(out, "{} variant(s)", variants.len())
}

pub fn write_colors(out: &mut dyn Write, sizes: &[String], colors: &[String]) -> io::Result<()> {
    let sizes = sort_sizes(sizes.iter().map(String::as_str));
    if colors.is_empty() {
        return writeln!(out, "No colors offered in sizes {}", sizes.join(", "));
    }
    writeln!(out, "Colors offered in sizes {}:", sizes.join(", "))?;
    for color in colors {
        writeln!(out, "  {color}")?;
    }
    Ok(())
}

/// Summary of the variants a batch will be created with.
pub fn write_selection(out: &mut dyn Write, selection: &CatalogSelection) -> io::Result<()> {
    writeln!(
        out,
        "Blueprint {} via {} (#{}): {} variant(s)",
        selection.blueprint_id,
        selection.provider.title,
        selection.provider.id,
        selection.chosen.len()
    )?;
    writeln!(out, "  Colors: {}", selection.chosen_colors().join(", "))?;
    writeln!(out, "  Sizes:  {}", selection.chosen_sizes().join(", "))
}

pub fn write_plan(out: &mut dyn Write, file_name: &str, body: &ProductBody) -> io::Result<()> {
    let price = body.variants.first().map_or(0, |variant| variant.price);
    writeln!(
        out,
        "[dry-run] {file_name} -> \"{}\" ({} variants at {})",
        body.title,
        body.variants.len(),
        format_cents(price)
    )
}

/// One line per finished file, written while the batch is still running.
pub fn write_outcome(out: &mut dyn Write, item: &ItemOutcome) -> io::Result<()> {
    match item {
        ItemOutcome::Published { file_name, product_id, title, variant_count } => writeln!(
            out,
            "OK    {file_name}: published \"{title}\" as {product_id} ({variant_count} variants)"
        ),
        ItemOutcome::Failed { file_name, stage, error } => {
            writeln!(out, "FAIL  {file_name}: {stage} failed: {error}")
        }
    }
}

pub fn write_batch_summary(out: &mut dyn Write, report: &BatchReport) -> io::Result<()> {
    writeln!(
        out,
        "Done: {} published, {} failed (run {})",
        report.succeeded(),
        report.failed(),
        report.run_id
    )
}

/// Error with its context chain, followed by remediation steps when the
/// underlying failure has any.
pub fn write_error(out: &mut dyn Write, err: &anyhow::Error) -> io::Result<()> {
    writeln!(out, "Error: {err:#}")?;
    if let Some(hint) = find_publish_error(err).and_then(|publish| publish.remediation()) {
        writeln!(out)?;
        writeln!(out, "{hint}")?;
    }
    Ok(())
}

fn format_cents(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
