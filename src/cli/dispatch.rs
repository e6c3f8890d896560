use anyhow::Result;
use clap::CommandFactory;
use std::io::{self, Write};
use std::str::FromStr;
use tracing::debug;

use mlsteps::commands::common::{Context, GlobalOptions};
use mlsteps::commands::{check, next, reset, show, status};
use mlsteps::completions::{complete_dynamic, generate_completions, CompletionContext, Shell};
use mlsteps::outline;

use super::types::{Cli, Commands};

pub fn dispatch(command: Commands, options: &GlobalOptions) -> Result<()> {
    match command {
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = Cli::command();
            let stdout = io::stdout();
            generate_completions(&mut cmd, shell, &mut stdout.lock());
            Ok(())
        }
        Commands::Complete { shell, args } => complete(&shell, &args, options),
        Commands::Show {
            format,
            step,
            progress,
        } => show::execute(&Context::open(options)?, format, step, progress),
        Commands::Check { ids } => check::execute(&Context::open(options)?, ids, true),
        Commands::Uncheck { ids } => check::execute(&Context::open(options)?, ids, false),
        Commands::Status => status::execute(&Context::open(options)?),
        Commands::Next => next::execute(&Context::open(options)?),
        Commands::Reset => reset::execute(&Context::open(options)?),
    }
}

/// Print completion candidates one per line. A broken config falls back
/// to the built-in outline so completion keeps working.
fn complete(shell: &str, args: &[String], options: &GlobalOptions) -> Result<()> {
    let ctx = CompletionContext::from_args(shell, args);
    let outline = match Context::open(options) {
        Ok(ctx) => ctx.outline,
        Err(err) => {
            debug!("completion falls back to built-in outline: {err:#}");
            outline::load()?
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for candidate in complete_dynamic(&ctx, &outline) {
        writeln!(out, "{candidate}")?;
    }
    Ok(())
}
