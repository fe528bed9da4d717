mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli.command) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(command: &Command) -> Result<String> {
    match command {
        Command::Now => commands::now(),
        Command::Add(args) => commands::shift(args, false),
        Command::Sub(args) => commands::shift(args, true),
        Command::Boundary(args) => commands::boundary(args),
        Command::Diff(args) => commands::diff(args),
        Command::Compare(args) => commands::compare(args),
        Command::Format(args) => commands::format(args),
        Command::DaysInMonth(args) => commands::days_in_month_cmd(args),
    }
}
