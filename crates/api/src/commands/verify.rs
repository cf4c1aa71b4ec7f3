//! Token verification and shop listing

use std::io::Write;

use anyhow::Context;
use podpublish_domain::PublishError;

use crate::context::AppContext;
use crate::utils::report;

/// Check the token. A valid token without shops is still a failure, since
/// nothing can be published with it.
pub async fn verify(ctx: &AppContext, out: &mut dyn Write) -> anyhow::Result<()> {
    let shops = ctx.service.verify_token().await.context("Verifying token")?;
    if shops.is_empty() {
        return Err(PublishError::NoShops).context("Verifying token");
    }

    writeln!(out, "Token OK. {} shop(s) linked:", shops.len())?;
    report::write_shops(out, &shops)?;
    Ok(())
}

pub async fn shops(ctx: &AppContext, out: &mut dyn Write) -> anyhow::Result<()> {
    let shops = ctx.api.list_shops().await.context("Listing shops")?;
    report::write_shops(out, &shops)?;
    Ok(())
}
