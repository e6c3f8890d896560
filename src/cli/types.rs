use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use mlsteps::commands::common::GlobalOptions;

const HELP_TEMPLATE: &str = "
 ┌┬┐┬    ┌─┐┌┬┐┌─┐┌─┐┌─┐
 ││││    └─┐ │ ├┤ ├─┘└─┐
 ┴ ┴┴─┘  └─┘ ┴ └─┘┴  └─┘

{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

#[derive(Parser)]
#[command(name = "mlsteps")]
#[command(about = "Checklist for the 12 steps of applied machine learning", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (default: ~/.config/mlsteps/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Progress file to read and write
    #[arg(long, global = true, value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Markdown outline to use instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    pub outline: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    pub fn options(&self) -> GlobalOptions {
        GlobalOptions {
            config: self.config.clone(),
            state: self.state.clone(),
            outline: self.outline.clone(),
            no_color: self.no_color,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the outline or a subtree of it
    Show {
        /// Output format: plain, markdown (md) or json
        #[arg(short, long)]
        format: Option<String>,

        /// Only show the subtree rooted at this step id (e.g. 3.2)
        #[arg(short, long)]
        step: Option<String>,

        /// Annotate steps with saved progress
        #[arg(short, long)]
        progress: bool,
    },

    /// Mark steps as done
    Check {
        /// Step ids (e.g. 1 3.2 5.2.1)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Mark steps as not done
    Uncheck {
        /// Step ids (e.g. 1 3.2 5.2.1)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Show progress per top-level step
    Status,

    /// Show the first step that is not done yet
    Next,

    /// Forget all saved progress
    Reset,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },

    /// Internal: Dynamic completion helper (invoked by shell)
    #[command(hide = true)]
    Complete {
        /// Shell type
        shell: String,
        /// Command line arguments being completed
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}
