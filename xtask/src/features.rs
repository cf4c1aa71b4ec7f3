use std::process::Command;

use anyhow::{Context, Result};

const CRATE: &str = "podpublish-common";

/// Feature tiers of `podpublish-common`, lowest first. Each must build
/// without the tiers above it.
const TIERS: &[&str] = &["foundation", "observability", "runtime", "test-utils"];

/// Check that `podpublish-common` compiles bare and with each tier alone.
pub fn test_feature_matrix() -> Result<()> {
    let total = TIERS.len() + 1;
    println!("Checking {total} {CRATE} feature sets...");

    check(1, total, None)?;
    for (index, tier) in TIERS.iter().enumerate() {
        check(index + 2, total, Some(tier))?;
    }

    println!("\n✅ All {total} feature sets compile");
    Ok(())
}

fn check(step: usize, total: usize, tier: Option<&str>) -> Result<()> {
    let label = tier.unwrap_or("no features");
    println!("\n[{step}/{total}] {CRATE}: {label}");

    let mut command = Command::new("cargo");
    command.args(["check", "--package", CRATE, "--no-default-features"]);
    if let Some(tier) = tier {
        command.args(["--features", tier]);
    }

    let status = command.status().with_context(|| format!("Failed to run cargo check for '{label}'"))?;
    if !status.success() {
        anyhow::bail!("{CRATE} failed to compile with {label}");
    }

    println!("✅ {label}");
    Ok(())
}
