use gridpath_core::{GridError, Point};
use log::{debug, trace};

use crate::engine::{SearchEngine, SearchOutcome, SearchState};
use crate::node::{self, OpenEntry, SearchNode, Slot};
use crate::traits::AstarPather;

impl SearchEngine {
    /// Compute a shortest path from `from` to `to` using A*.
    ///
    /// Returns [`GridError::OutOfBounds`] if either endpoint lies outside
    /// the engine's range; otherwise the search always terminates with
    /// [`SearchOutcome::Found`] or [`SearchOutcome::NoPath`].
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<SearchOutcome, GridError> {
        self.begin(pather, from, to)?;
        while self.step(pather) == SearchState::Running {}
        let outcome = self.outcome();
        debug!(
            "astar {from} -> {to}: {:?} after {} expansions ({} nodes created)",
            self.state,
            self.visited.len(),
            self.nodes.len()
        );
        Ok(outcome.unwrap_or(SearchOutcome::NoPath {
            visited: self.visited.clone(),
        }))
    }

    /// Reset the engine and seed the open set with the start node.
    ///
    /// The search is then driven with [`step`](Self::step).
    pub fn begin<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<(), GridError> {
        let start_idx = self.checked_idx(from)?;
        self.checked_idx(to)?;

        self.reset_run();
        let cur_gen = self.bump_generation();
        self.goal = to;
        self.slots[start_idx] = Slot {
            generation: cur_gen,
            best_g: 0,
            closed: false,
        };
        self.push(SearchNode {
            pos: from,
            g: 0,
            h: pather.estimate(from, to),
            parent: None,
        });
        self.state = SearchState::Running;
        Ok(())
    }

    /// Perform one transition: pop the best open node and, unless it is the
    /// goal, expand its neighbors. Popping a dominated or already-closed
    /// entry discards it without counting as an expansion.
    ///
    /// Returns the state after the transition. Calling `step` on a search
    /// that is not [`SearchState::Running`] does nothing.
    pub fn step<P: AstarPather>(&mut self, pather: &P) -> SearchState {
        if self.state != SearchState::Running {
            return self.state;
        }
        let cur_gen = self.generation;

        let Some(entry) = self.open.pop() else {
            self.state = SearchState::Exhausted;
            return self.state;
        };
        let current = self.nodes[entry.node];
        let Some(ci) = self.rng.index(current.pos) else {
            return self.state;
        };

        let slot = &mut self.slots[ci];
        if slot.closed || current.g > slot.best_g {
            // Stale entry.
            return self.state;
        }
        slot.closed = true;
        self.visited.push(current.pos);
        trace!(
            "expand {} g={} h={:.3} open={}",
            current.pos,
            current.g,
            current.h,
            self.open.len()
        );

        if current.pos == self.goal {
            self.goal_node = Some(entry.node);
            self.state = SearchState::GoalReached;
            return self.state;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        pather.neighbors(current.pos, &mut nbuf);

        let tentative_g = current.g + 1;
        for &np in nbuf.iter() {
            let Some(ni) = self.rng.index(np) else {
                continue;
            };
            let slot = &mut self.slots[ni];
            if slot.generation == cur_gen {
                if slot.closed || slot.best_g <= tentative_g {
                    continue;
                }
            } else {
                slot.generation = cur_gen;
                slot.closed = false;
            }
            slot.best_g = tentative_g;

            self.push(SearchNode {
                pos: np,
                g: tentative_g,
                h: pather.estimate(np, self.goal),
                parent: Some(entry.node),
            });
        }

        self.nbuf = nbuf;
        self.state
    }

    /// The result of a finished search, or `None` while it is idle or
    /// still running.
    pub fn outcome(&self) -> Option<SearchOutcome> {
        match self.state {
            SearchState::Idle | SearchState::Running => None,
            SearchState::GoalReached => {
                let leaf = self.goal_node?;
                Some(SearchOutcome::Found {
                    path: node::reconstruct(&self.nodes, leaf),
                    visited: self.visited.clone(),
                })
            }
            SearchState::Exhausted => Some(SearchOutcome::NoPath {
                visited: self.visited.clone(),
            }),
        }
    }

    fn push(&mut self, node: SearchNode) {
        let idx = self.nodes.len();
        self.nodes.push(node);
        self.open.push(OpenEntry {
            f: node.f(),
            node: idx,
        });
    }

    fn checked_idx(&self, p: Point) -> Result<usize, GridError> {
        self.rng.index(p).ok_or(GridError::OutOfBounds {
            point: p,
            rows: self.rng.rows().max(0) as usize,
            cols: self.rng.cols().max(0) as usize,
        })
    }
}
