#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::{error::Error, process::ExitCode};

use clap::Parser;
use env_logger::Env;

use crate::{
    cli::{Cli, Command},
    config::Config,
    cross_check::cross_check,
    repl::repl,
    rules::{InBounds, Standard},
};

mod board;
mod board_display;
mod cli;
mod color;
mod config;
mod cross_check;
mod error;
mod grid;
mod piece;
mod repl;
mod rules;
mod square;

const LOG_ENV: &str = "SHUFFLECHESS_LOG";

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = Config::load(cli.config.as_deref())?.with_seed_override(cli.seed);
    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            if config.bounded_moves {
                repl(InBounds(Standard), &config)?;
            } else {
                repl(Standard, &config)?;
            }
        }
        Command::CrossCheck { iterations } => {
            cross_check(iterations, &mut config.rng())?;
            println!("{iterations} placements agree with the reference move tables");
        }
    }
    Ok(())
}
fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, "warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
