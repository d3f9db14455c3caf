//! Front-ends for the gridpath search: an interactive terminal session and
//! a JSON request handler. Both only translate input into a grid and two
//! points and hand the outcome to the [`sink`].

pub mod cli;
pub mod error;
pub mod interactive;
pub mod request;
pub mod sink;

use std::fs::File;
use std::io::{self, BufReader};

use gridpath_astar::{Heuristic, search};
use log::{debug, warn};

pub use cli::{Cli, Command};
pub use error::CliError;
pub use request::Request;

/// Execute the parsed command line.
pub fn run(cli: Cli) -> Result<(), CliError> {
    let heuristic = Heuristic::from(cli.heuristic);
    match cli.command {
        Command::Interactive { grid, output } => {
            let stdin = io::stdin();
            let outcome = interactive::run(&grid, &output, heuristic, stdin.lock(), io::stdout().lock())?;
            if !outcome.is_found() {
                warn!("no path found in {}", grid.display());
            }
            Ok(())
        }
        Command::Request { input, output } => {
            let req = match &input {
                Some(path) => {
                    let f = File::open(path).map_err(|source| CliError::File {
                        path: path.clone(),
                        source,
                    })?;
                    Request::from_reader(BufReader::new(f))?
                }
                None => Request::from_reader(io::stdin().lock())?,
            };
            debug!(
                "request: {}x{} grid, {} -> {}, save_result={}",
                req.grid.rows(),
                req.grid.cols(),
                req.start,
                req.end,
                req.save_result
            );
            let outcome = search(&req.grid, req.start, req.end, heuristic)?;
            sink::deliver(&req, &outcome, output.as_deref(), io::stdout().lock())
        }
    }
}
