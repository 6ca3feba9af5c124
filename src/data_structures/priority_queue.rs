use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Counters collected while a frontier is in use
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrontierStats {
    /// Entries pushed
    pub pushes: usize,
    /// Entries popped, stale or not
    pub pops: usize,
    /// Popped entries discarded as stale by the caller
    pub stale: usize,
}

/// A min-priority frontier backed by `BinaryHeap`
///
/// Entries are never updated in place: a better priority for a vertex is pushed
/// as a new entry, and the caller discards outdated ones when they surface
/// (lazy deletion). Entries with equal priority come out in insertion order.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying heap of (priority, insertion sequence, vertex)
    heap: BinaryHeap<Reverse<(P, u64, V)>>,
    sequence: u64,
    stats: FrontierStats,
}

impl<V, P> Frontier<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            sequence: 0,
            stats: FrontierStats::default(),
        }
    }

    /// Creates a frontier seeded with a single entry
    pub fn seeded(vertex: V, priority: P) -> Self {
        let mut frontier = Self::new();
        frontier.push(vertex, priority);
        frontier
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, self.sequence, vertex)));
        self.sequence += 1;
        self.stats.pushes += 1;
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        let popped = self
            .heap
            .pop()
            .map(|Reverse((priority, _, vertex))| (vertex, priority));
        if popped.is_some() {
            self.stats.pops += 1;
        }
        popped
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap
            .peek()
            .map(|Reverse((priority, _, vertex))| (*vertex, *priority))
    }

    /// Records that a popped entry was outdated
    pub fn mark_stale(&mut self) {
        self.stats.stale += 1;
    }

    /// Returns the counters collected so far
    pub fn stats(&self) -> FrontierStats {
        self.stats
    }

    /// Clears the frontier and its counters
    pub fn clear(&mut self) {
        self.heap.clear();
        self.sequence = 0;
        self.stats = FrontierStats::default();
    }
}

impl<V, P> Default for Frontier<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
