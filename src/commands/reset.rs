//! Clear all recorded progress.

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
    let path = ctx.store.path().display();
    if ctx.store.clear()? {
        writeln!(out, "{} Cleared progress: {path}", "ok".green().bold())?;
    } else {
        writeln!(out, "No progress recorded at {path}")?;
    }
    Ok(())
}
