//! Command-line configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use gridpath_astar::Heuristic;
use log::LevelFilter;

use crate::sink::DEFAULT_RESULT_FILE;

#[derive(Debug, Parser)]
#[command(name = "gridpath", version, about = "Shortest paths on obstacle grids with A*")]
pub struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Remaining-distance estimate used by the search.
    #[arg(long, global = true, value_enum, default_value = "euclidean")]
    pub heuristic: HeuristicArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read a grid file, then prompt for the endpoints on the terminal.
    Interactive {
        /// Grid file: one row per line, space-separated 0/1 cells.
        #[arg(long)]
        grid: PathBuf,
        /// Where the annotated grid is saved.
        #[arg(long, default_value = DEFAULT_RESULT_FILE)]
        output: PathBuf,
    },
    /// Solve a JSON request `{grid, start, end, saveResult}`.
    Request {
        /// Request file; stdin when omitted.
        #[arg(long)]
        input: Option<PathBuf>,
        /// With `saveResult`, write the annotated grid here instead of
        /// streaming it to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum HeuristicArg {
    Euclidean,
    Manhattan,
}

impl From<HeuristicArg> for Heuristic {
    fn from(h: HeuristicArg) -> Self {
        match h {
            HeuristicArg::Euclidean => Heuristic::Euclidean,
            HeuristicArg::Manhattan => Heuristic::Manhattan,
        }
    }
}
