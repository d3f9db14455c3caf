use std::collections::VecDeque;

use gridpath_core::Point;

use crate::engine::{SearchEngine, UNREACHABLE};
use crate::traits::Pather;

impl SearchEngine {
    /// Unweighted shortest distance from `from` to `to` by breadth-first
    /// search, in moves. `None` if either point is outside the range or
    /// `to` cannot be reached.
    ///
    /// Shares no state with A*, so it can be used to cross-check
    /// [`astar_path`](Self::astar_path) results on the same engine.
    pub fn bfs_distance<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> Option<u32> {
        let from_idx = self.rng.index(from)?;
        let to_idx = self.rng.index(to)?;

        self.bfs_dist.fill(UNREACHABLE);
        self.bfs_dist[from_idx] = 0;
        let mut queue: VecDeque<usize> = VecDeque::from([from_idx]);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = None;

        while let Some(ci) = queue.pop_front() {
            let current_dist = self.bfs_dist[ci];
            if ci == to_idx {
                found = Some(current_dist);
                break;
            }

            nbuf.clear();
            pather.neighbors(self.rng.point(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.rng.index(np) else {
                    continue;
                };
                if self.bfs_dist[ni] != UNREACHABLE {
                    continue;
                }
                self.bfs_dist[ni] = current_dist + 1;
                queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        found
    }

    /// Distance recorded at `p` by the last [`bfs_distance`](Self::bfs_distance)
    /// call, or [`UNREACHABLE`]. Only cells settled before the target was
    /// reached carry meaningful values.
    pub fn bfs_at(&self, p: Point) -> u32 {
        match self.rng.index(p) {
            Some(i) => self.bfs_dist[i],
            None => UNREACHABLE,
        }
    }
}
