use std::cmp::Ordering;

use gridpath_core::Point;

/// A search-time record: a position with its cost so far, its heuristic
/// estimate and a link to the node it was reached from.
///
/// Nodes live in an arena owned by the [`SearchEngine`](crate::SearchEngine);
/// `parent` indexes into that arena. Parents always precede their children,
/// so the links form a tree rooted at the start node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    pub pos: Point,
    /// Moves taken from the start.
    pub g: u32,
    /// Heuristic estimate of the moves remaining.
    pub h: f64,
    pub parent: Option<usize>,
}

impl SearchNode {
    /// Estimated total cost `g + h`.
    #[inline]
    pub fn f(&self) -> f64 {
        f64::from(self.g) + self.h
    }
}

/// Walk `parent` links from `leaf` back to the root and return the
/// positions in root-to-leaf order.
///
/// Panics if `leaf` or any parent index is not in `nodes`.
pub fn reconstruct(nodes: &[SearchNode], leaf: usize) -> Vec<Point> {
    let mut path = Vec::with_capacity(nodes[leaf].g as usize + 1);
    let mut cur = Some(leaf);
    while let Some(i) = cur {
        path.push(nodes[i].pos);
        cur = nodes[i].parent;
    }
    path.reverse();
    path
}

// ---------------------------------------------------------------------------
// Open-set entries and per-position slots
// ---------------------------------------------------------------------------

/// Reference into the node arena, ordered for use in `BinaryHeap`.
///
/// Smallest `f` pops first; equal `f` pops the earlier-inserted node. Arena
/// indices grow with insertion, so `node` doubles as the insertion order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub(crate) f: f64,
    pub(crate) node: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, node) first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// Per-position search state, valid only when `generation` matches the
/// engine's current generation.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Slot {
    pub(crate) generation: u32,
    /// Lowest `g` queued for this position in the current search.
    pub(crate) best_g: u32,
    pub(crate) closed: bool,
}
