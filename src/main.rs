use clap::Parser;
use colored::Colorize;

mod cli;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    mlsteps::logging::init(cli.global.verbose);

    let options = cli.global.options();
    if let Err(err) = cli::dispatch(cli.command, &options) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(mlsteps::error::exit_code_for(&err));
    }
}
