//! Show command handler

use anyhow::Result;

use wcgen::cli::OutputArgs;

use super::{present, Context};

/// Load a saved word cloud read-only and display it.
#[cfg(not(tarpaulin_include))]
pub async fn handle(ctx: &Context, id: &str, output: &OutputArgs) -> Result<()> {
    let presenter = ctx.open_permalink(id).await?;
    present(&presenter, output, &ctx.config)
}
