use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Debug;

use crate::graph::{Graph, Tree, Weight};
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex; `None` marks an unreachable vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Distance to `vertex`, or `None` if it is unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Returns true if `vertex` was reached from the source
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reached from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Walks the predecessors back from `target` to the source
    ///
    /// Returns `None` if the target is out of range or unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != self.source {
            if !visited.insert(current) {
                log::warn!("Cycle detected in predecessors at vertex {}", current);
                return None;
            }

            path.push(current);
            current = (*self.predecessors.get(current)?)?;
        }

        path.push(self.source);
        path.reverse();

        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}

/// Trait for tree traversal orders
pub trait TreeTraversal<T>: Debug {
    /// Get the name of the traversal
    fn name(&self) -> &'static str;

    /// Node indices of the subtree rooted at `start`, in visiting order
    fn visit_order(&self, tree: &Tree<T>, start: usize) -> Result<Vec<usize>>;

    /// Values of the whole tree in visiting order
    ///
    /// Fails with `NullRoot` if the tree is empty.
    fn traverse(&self, tree: &Tree<T>) -> Result<Vec<T>>
    where
        T: Clone,
    {
        let root = tree.root().ok_or(Error::NullRoot)?;
        self.traverse_from(tree, root)
    }

    /// Values of the subtree rooted at `start` in visiting order
    fn traverse_from(&self, tree: &Tree<T>, start: usize) -> Result<Vec<T>>
    where
        T: Clone,
    {
        self.visit_order(tree, start)?
            .into_iter()
            .map(|id| tree.value(id).cloned())
            .collect()
    }
}
