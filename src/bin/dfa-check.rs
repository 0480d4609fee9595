//! dfa-check - Validate strings against two-symbol DFA definitions

use clap::Parser;
use colored::Colorize;
use std::process;

use dfa_check::cli::{commands, init_logging, Cli, Config};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = Config::load(cli.config.as_deref()).and_then(|config| {
        let config = config.merge_with_cli(cli.no_color);
        if !config.color {
            colored::control::set_override(false);
        }
        commands::execute(cli.command, &config)
    });

    if let Err(e) = result {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
