mod cli;
mod defaults;
mod error;
mod logging;
mod parse;
mod progress;
mod render;
mod show;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let verbose = matches!(&cli.command, Commands::Show { args } if args.verbose);
    logging::init(verbose);

    let result = match cli.command {
        Commands::Show { args } => show::execute(args),
        Commands::Parse { file } => parse::execute(file),
        Commands::Defaults { format } => defaults::execute(format),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
