use std::collections::VecDeque;

use crate::algorithm::TreeTraversal;
use crate::graph::Tree;
use crate::{Error, Result};

/// Breadth-first, level-order traversal
///
/// The root comes first, then its children in listed order, then the
/// grandchildren in the order their parents were dequeued.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirst;

impl BreadthFirst {
    /// Create a new breadth-first traversal
    pub fn new() -> Self {
        BreadthFirst
    }

    /// Node indices grouped by depth below `start`
    pub fn levels_from<T>(&self, tree: &Tree<T>, start: usize) -> Result<Vec<Vec<usize>>> {
        tree.node(start)?;

        let mut levels = Vec::new();
        let mut current = vec![start];
        while !current.is_empty() {
            let mut next = Vec::new();
            for &id in &current {
                next.extend_from_slice(tree.children(id)?);
            }
            levels.push(current);
            current = next;
        }

        Ok(levels)
    }

    /// Values of the whole tree grouped by depth
    pub fn levels<T: Clone>(&self, tree: &Tree<T>) -> Result<Vec<Vec<T>>> {
        let root = tree.root().ok_or(Error::NullRoot)?;
        self.levels_from(tree, root)?
            .into_iter()
            .map(|level| {
                level
                    .into_iter()
                    .map(|id| tree.value(id).cloned())
                    .collect()
            })
            .collect()
    }
}

impl<T> TreeTraversal<T> for BreadthFirst {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn visit_order(&self, tree: &Tree<T>, start: usize) -> Result<Vec<usize>> {
        tree.node(start)?;

        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);

        while let Some(id) = queue.pop_front() {
            order.push(id);
            queue.extend(tree.children(id)?);
        }

        log::debug!("BFS from node {} visited {} nodes", start, order.len());
        Ok(order)
    }
}
