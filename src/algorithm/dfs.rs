use crate::algorithm::TreeTraversal;
use crate::graph::Tree;
use crate::Result;

/// How the depth-first traversal keeps track of pending nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DfsMode {
    /// Explicit stack; depth is bounded only by memory
    #[default]
    Iterative,
    /// Call-stack recursion; very deep trees can overflow the thread stack
    Recursive,
}

/// Depth-first, pre-order traversal: a node, then each child's subtree in order
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirst {
    mode: DfsMode,
}

impl DepthFirst {
    /// Create a new iterative depth-first traversal
    pub fn new() -> Self {
        DepthFirst {
            mode: DfsMode::Iterative,
        }
    }

    /// Set how pending nodes are tracked
    pub fn with_mode(mut self, mode: DfsMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the configured mode
    pub fn mode(&self) -> DfsMode {
        self.mode
    }

    fn iterative<T>(tree: &Tree<T>, start: usize) -> Result<Vec<usize>> {
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            order.push(id);
            // Reversed so the first child is popped next
            stack.extend(tree.children(id)?.iter().rev());
        }

        Ok(order)
    }

    fn recursive<T>(tree: &Tree<T>, id: usize, order: &mut Vec<usize>) -> Result<()> {
        order.push(id);
        for &child in tree.children(id)? {
            Self::recursive(tree, child, order)?;
        }
        Ok(())
    }
}

impl<T> TreeTraversal<T> for DepthFirst {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn visit_order(&self, tree: &Tree<T>, start: usize) -> Result<Vec<usize>> {
        tree.node(start)?;

        let order = match self.mode {
            DfsMode::Iterative => Self::iterative(tree, start)?,
            DfsMode::Recursive => {
                let mut order = Vec::with_capacity(tree.len());
                Self::recursive(tree, start, &mut order)?;
                order
            }
        };

        log::debug!(
            "DFS ({:?}) from node {} visited {} nodes",
            self.mode,
            start,
            order.len()
        );
        Ok(order)
    }
}
