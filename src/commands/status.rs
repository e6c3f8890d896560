//! Progress summary per top-level step.

use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

use super::common::Context;
use crate::render::status_glyph;
use crate::tracker::Progress;

const BAR_WIDTH: usize = 20;

/// Show the progress dashboard
pub fn execute(ctx: &Context) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write(ctx, &mut out)
}

pub fn write<W: Write>(ctx: &Context, out: &mut W) -> Result<()> {
    let tracker = ctx.tracker();
    let state = ctx.load_state()?;

    writeln!(out, "{}", ctx.outline.title().bold().blue())?;
    writeln!(out, "{}", "=".repeat(50))?;

    let width = ctx
        .outline
        .children()
        .iter()
        .map(|s| s.path().to_string().len() + 2 + s.title().chars().count())
        .max()
        .unwrap_or(0);

    for step in ctx.outline.children() {
        let progress = tracker.progress(&state, step);
        let label = format!("{}  {}", step.path(), step.title());
        writeln!(
            out,
            "{} {label:<width$}  {} {:>2}/{}",
            status_glyph(tracker.status(&state, step)),
            progress_bar(&progress),
            progress.done,
            progress.total,
        )?;
    }

    let overall = tracker.progress(&state, &ctx.outline);
    writeln!(out, "{}", "-".repeat(50))?;
    writeln!(
        out,
        "{} {}/{} steps ({}%)",
        "Overall:".bold(),
        overall.done,
        overall.total,
        overall.percent()
    )?;
    writeln!(
        out,
        "{}",
        format!("Progress file: {}", ctx.store.path().display()).dimmed()
    )?;
    Ok(())
}

/// Render progress bar: [████████░░░░░░░░░░░░]
pub fn progress_bar(progress: &Progress) -> String {
    let filled = if progress.total == 0 {
        BAR_WIDTH
    } else {
        progress.done * BAR_WIDTH / progress.total
    };
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));

    let colored_bar = if progress.is_complete() {
        bar.green()
    } else if progress.done > 0 {
        bar.yellow()
    } else {
        bar.dimmed()
    };
    format!("[{colored_bar}]")
}
