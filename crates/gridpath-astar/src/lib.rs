//! A* shortest-path search on 4-connected grids.
//!
//! Every move between cardinal neighbours costs exactly 1, so the search
//! returns a path with the minimum number of moves whenever one exists,
//! together with the order in which cells were expanded.
//!
//! - [`search`] validates the endpoints against a [`Grid`](gridpath_core::Grid)
//!   and runs a one-off search.
//! - [`SearchEngine`] owns reusable caches and can be driven in one call
//!   ([`SearchEngine::astar_path`]) or one expansion at a time
//!   ([`SearchEngine::begin`] / [`SearchEngine::step`]).
//!
//! # Tie-breaking
//!
//! The open set is a binary heap keyed on `(f, insertion order)`: among
//! nodes with equal `f = g + h` the one queued first is expanded first.
//! When a cheaper route to a queued position is found, the older entry is
//! left in the heap but is discarded unexpanded when popped.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`AstarPather`] : [`Pather`] | A* |

mod astar;
mod bfs;
mod distance;
mod engine;
mod heuristic;
mod node;
mod search;
mod traits;

pub use distance::{euclidean, manhattan};
pub use engine::{SearchEngine, SearchOutcome, SearchState, UNREACHABLE};
pub use heuristic::{GridPather, Heuristic};
pub use node::{SearchNode, reconstruct};
pub use search::search;
pub use traits::{AstarPather, Pather};
