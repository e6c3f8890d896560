//! Print the outline or one of its subtrees.
//!
//! Usage: mlsteps show [--format plain|markdown|json] [--step ID] [--progress]

use anyhow::{Context as _, Result};
use std::io::{self, Write};

use super::common::Context;
use crate::render::{render, Format, ProgressView};

/// Show the outline on stdout
pub fn execute(
    ctx: &Context,
    format: Option<String>,
    step: Option<String>,
    progress: bool,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write(ctx, format.as_deref(), step.as_deref(), progress, &mut out)
}

/// Render into `out`. Arguments are validated before anything is written.
pub fn write<W: Write>(
    ctx: &Context,
    format: Option<&str>,
    step: Option<&str>,
    progress: bool,
    out: &mut W,
) -> Result<()> {
    let format: Format = format
        .or(ctx.config.format.as_deref())
        .map(str::parse)
        .transpose()?
        .unwrap_or_default();

    let tracker = ctx.tracker();
    let root = match step {
        Some(id) => tracker.resolve(id)?,
        None => &ctx.outline,
    };

    let state = if progress || ctx.config.progress == Some(true) {
        Some(ctx.load_state()?)
    } else {
        None
    };
    let view = state
        .as_ref()
        .map(|state| ProgressView::new(tracker, state));

    render(root, format, view)
        .write_to(out)
        .context("Failed to write rendered outline")?;
    Ok(())
}
