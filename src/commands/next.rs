//! Show the first step that is not done yet.

use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

use super::common::Context;

pub fn execute(ctx: &Context) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write(ctx, &mut out)
}

pub fn write<W: Write>(ctx: &Context, out: &mut W) -> Result<()> {
    let tracker = ctx.tracker();
    let state = ctx.load_state()?;

    let Some(step) = tracker.next_open(&state) else {
        writeln!(out, "{} All steps are complete.", "✓".green().bold())?;
        return Ok(());
    };

    writeln!(
        out,
        "{} Next:  {}  {}",
        "▶".cyan().bold(),
        step.path(),
        step.title().bold()
    )?;

    // Enclosing steps, outermost first
    for ancestor in step.path().lineage().filter(|p| p != step.path()) {
        if let Some(parent) = ctx.outline.find(&ancestor) {
            writeln!(out, "   {} {}  {}", "in".dimmed(), parent.path(), parent.title())?;
        }
    }
    Ok(())
}
