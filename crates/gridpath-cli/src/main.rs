//! `gridpath` — A* shortest paths on obstacle grids.
//!
//! Run: cargo run -- interactive --grid grid.txt
//!      cargo run -- request --input request.json

use clap::Parser;
use gridpath_cli::Cli;

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str()))
        .init();

    if let Err(e) = gridpath_cli::run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
