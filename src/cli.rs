use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::CONFIG_ENV;

#[derive(Debug, Parser)]
#[command(name = "shufflechess", version, about = "Shuffle a chess board and explore piece moves")]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,
    /// Seed for shuffling, overrides the configuration file
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive board (default)
    Repl,
    /// Compare move generation against the `chess` crate on random squares
    CrossCheck {
        #[arg(long, default_value_t = 10_000)]
        iterations: u32,
    },
}
