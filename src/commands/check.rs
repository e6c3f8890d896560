//! Mark steps complete or incomplete.
//!
//! Usage: mlsteps check <ID>... / mlsteps uncheck <ID>...

use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

use super::common::Context;

/// Set the completion flag on each id and save. The progress file stays
/// locked from load to save. Unknown ids abort before anything is changed
/// on disk.
pub fn execute(ctx: &Context, ids: Vec<String>, completed: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write(ctx, &ids, completed, &mut out)
}

pub fn write<W: Write>(ctx: &Context, ids: &[String], completed: bool, out: &mut W) -> Result<()> {
    let tracker = ctx.tracker();
    let (steps, progress) = ctx.store.update(|state| {
        tracker.prune(state);
        let steps = tracker.mark_all(state, ids, completed)?;
        Ok((steps, tracker.progress(state, tracker.outline())))
    })?;

    let (marker, verb) = if completed {
        ("✓".green().bold(), "Checked")
    } else {
        ("○".white().dimmed(), "Unchecked")
    };
    for step in steps {
        writeln!(out, "{marker} {verb} {}  {}", step.path(), step.title())?;
    }

    writeln!(
        out,
        "  {}",
        format!("{}/{} steps done", progress.done, progress.total).dimmed()
    )?;
    Ok(())
}
