//! Command handlers
//!
//! [`run`] turns parsed arguments into a wired [`AppContext`];
//! [`execute`] dispatches a single command against it.

pub mod catalog;
pub mod publish;
pub mod verify;

use std::io::{self, Write};
use std::time::Instant;

use anyhow::Context;
use podpublish_infra::config;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::context::{resolve_credential, AppContext};
use crate::utils::logging::log_command_execution;
use crate::utils::report;

/// Load configuration, resolve the token and run the selected command.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut app_config = config::load(cli.config.as_deref()).context("Loading configuration")?;
    cli.command.apply(&mut app_config.publish);
    debug!(config = ?app_config, "Configuration resolved");

    let credential = resolve_credential(cli.token.as_deref()).context("Reading API token")?;
    report::write_credential(&mut io::stderr(), &credential)?;

    let ctx = AppContext::new(app_config, credential).context("Configuring API client")?;
    let mut stdout = io::stdout().lock();
    execute(&ctx, &cli.command, &mut stdout).await
}

/// Run one command, writing its results to `out`.
pub async fn execute(
    ctx: &AppContext,
    command: &Command,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let started = Instant::now();

    let result = match command {
        Command::Verify => verify::verify(ctx, out).await,
        Command::Shops => verify::shops(ctx, out).await,
        Command::Blueprints { search } => catalog::blueprints(ctx, search.as_deref(), out).await,
        Command::Providers { .. } => catalog::providers(ctx, out).await,
        Command::Variants(_) => catalog::variants(ctx, out).await,
        Command::Colors(_) => catalog::colors(ctx, out).await,
        Command::Publish(args) => publish::publish(ctx, &args.files, args.dry_run, out).await,
    };

    log_command_execution(command.name(), started.elapsed(), result.as_ref().err());
    result
}
