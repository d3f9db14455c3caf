use std::collections::BinaryHeap;

use gridpath_core::{Point, Range};

use crate::node::{OpenEntry, SearchNode, Slot};

/// Sentinel value meaning "unreachable" in BFS distance maps.
pub const UNREACHABLE: u32 = u32::MAX;

/// Where a search stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// No search has been started on this engine.
    Idle,
    /// The open set may still hold nodes to expand.
    Running,
    /// The goal was popped from the open set.
    GoalReached,
    /// The open set emptied without reaching the goal.
    Exhausted,
}

/// Terminal result of a search.
///
/// `NoPath` is a legitimate outcome, not an error. Both variants carry the
/// visited sequence: positions in the order they were expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found {
        /// Start to goal, both inclusive.
        path: Vec<Point>,
        visited: Vec<Point>,
    },
    NoPath {
        visited: Vec<Point>,
    },
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::NoPath { .. } => None,
        }
    }

    pub fn visited(&self) -> &[Point] {
        match self {
            Self::Found { visited, .. } | Self::NoPath { visited } => visited,
        }
    }

    /// Number of expansions performed.
    pub fn steps(&self) -> usize {
        self.visited().len()
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// A* search driver for a grid rectangle.
///
/// The engine owns the open set, the node arena, the visited sequence and
/// one [`Slot`] per position. Slots are invalidated lazily by bumping a
/// generation counter, so repeated searches on the same engine allocate
/// nothing after warm-up. Independent engines share nothing and can run on
/// separate threads.
pub struct SearchEngine {
    pub(crate) rng: Range,
    // A* state
    pub(crate) slots: Vec<Slot>,
    pub(crate) generation: u32,
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) open: BinaryHeap<OpenEntry>,
    pub(crate) visited: Vec<Point>,
    pub(crate) goal: Point,
    pub(crate) goal_node: Option<usize>,
    pub(crate) state: SearchState,
    // BFS cache
    pub(crate) bfs_dist: Vec<u32>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl SearchEngine {
    /// Create a new engine for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            slots: vec![Slot::default(); len],
            generation: 0,
            nodes: Vec::new(),
            open: BinaryHeap::new(),
            visited: Vec::new(),
            goal: Point::ZERO,
            goal_node: None,
            state: SearchState::Idle,
            bfs_dist: vec![UNREACHABLE; len],
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, reallocating caches only when the new
    /// range has more cells than the current capacity. Any search in
    /// progress is abandoned.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.reset_run();
        self.state = SearchState::Idle;

        if new_len <= self.slots.len() {
            self.bump_generation();
            return;
        }

        self.slots.clear();
        self.slots.resize(new_len, Slot::default());
        self.generation = 0;
        self.bfs_dist.clear();
        self.bfs_dist.resize(new_len, UNREACHABLE);
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Positions expanded so far by the current search, in order.
    #[inline]
    pub fn visited(&self) -> &[Point] {
        &self.visited
    }

    /// Every node created by the current search. Dominated nodes stay in
    /// the arena; only the best one per position is ever expanded.
    #[inline]
    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    /// Number of entries currently in the open set, stale ones included.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    pub(crate) fn reset_run(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.visited.clear();
        self.goal_node = None;
    }

    /// Start a new generation; on wrap-around every slot is cleared so a
    /// stale slot can never look current.
    pub(crate) fn bump_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.slots.fill(Slot::default());
            self.generation = 1;
        }
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_engine_is_idle() {
        let engine = SearchEngine::new(Range::with_size(3, 4));
        assert_eq!(engine.state(), SearchState::Idle);
        assert_eq!(engine.slots.len(), 12);
        assert!(engine.visited().is_empty());
    }

    #[test]
    fn set_range_smaller_preserves_capacity() {
        let mut engine = SearchEngine::new(Range::with_size(20, 20));
        let cap = engine.slots.len();

        let small = Range::with_size(5, 5);
        engine.set_range(small);
        assert_eq!(engine.range(), small);
        assert_eq!(engine.slots.len(), cap);
        assert!(engine.generation > 0);
    }

    #[test]
    fn set_range_larger_reallocates() {
        let mut engine = SearchEngine::new(Range::with_size(5, 5));
        engine.set_range(Range::with_size(20, 20));
        assert_eq!(engine.slots.len(), 400);
        assert_eq!(engine.bfs_dist.len(), 400);
    }

    #[test]
    fn generation_wrap_clears_slots() {
        let mut engine = SearchEngine::new(Range::with_size(2, 2));
        engine.generation = u32::MAX;
        engine.slots[0] = Slot {
            generation: 1,
            best_g: 7,
            closed: true,
        };
        assert_eq!(engine.bump_generation(), 1);
        assert_eq!(engine.slots[0].generation, 0);
        assert!(!engine.slots[0].closed);
    }

    #[test]
    fn outcome_accessors() {
        let found = SearchOutcome::Found {
            path: vec![Point::new(0, 0), Point::new(0, 1)],
            visited: vec![Point::new(0, 0), Point::new(0, 1)],
        };
        assert!(found.is_found());
        assert_eq!(found.path().map(<[Point]>::len), Some(2));
        assert_eq!(found.steps(), 2);

        let none = SearchOutcome::NoPath {
            visited: vec![Point::new(0, 0)],
        };
        assert!(!none.is_found());
        assert_eq!(none.path(), None);
        assert_eq!(none.steps(), 1);
    }
}
