use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Deepest tree, counted in levels with the root as level 1, that
/// [`Tree::to_json`] writes
///
/// Every level nests an object and its `children` array, and `serde_json`
/// refuses input nested 128 levels or more, so deeper output could not be read
/// back by [`Tree::from_json`].
pub const MAX_JSON_DEPTH: usize = 63;

/// A node stored in the tree arena
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode<T> {
    pub value: T,
    /// Child node indices, in traversal order
    pub children: Vec<usize>,
}

/// A rooted tree stored as an arena of nodes addressed by index
///
/// Nodes are only ever created as fresh children of an existing node, so every
/// node other than the root has exactly one parent and the structure cannot
/// contain cycles. A tree without a root is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    nodes: Vec<TreeNode<T>>,
    root: Option<usize>,
}

/// Nested, serializable form of a tree
///
/// ```json
/// { "value": 1, "children": [ { "value": 2 }, { "value": 3, "children": [] } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDescription<T> {
    pub value: T,
    #[serde(default = "Vec::new")]
    pub children: Vec<TreeDescription<T>>,
}

impl<T> TreeDescription<T> {
    /// Creates a leaf description
    pub fn leaf(value: T) -> Self {
        TreeDescription {
            value,
            children: Vec::new(),
        }
    }

    /// Creates a description with the given subtrees
    pub fn node(value: T, children: Vec<TreeDescription<T>>) -> Self {
        TreeDescription { value, children }
    }
}

// Subtrees are released from an explicit stack so dropping a deep description
// does not recurse once per level.
impl<T> Drop for TreeDescription<T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut subtree) = pending.pop() {
            pending.append(&mut subtree.children);
        }
    }
}

impl<T> Tree<T> {
    /// Creates an empty tree with no root
    pub fn new() -> Self {
        Tree {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Creates a tree holding only a root node
    pub fn with_root(value: T) -> Self {
        Tree {
            nodes: vec![TreeNode {
                value,
                children: Vec::new(),
            }],
            root: Some(0),
        }
    }

    /// Returns the root index, or `None` for an empty tree
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// Returns the number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a new child under `parent` and returns its index
    pub fn add_child(&mut self, parent: usize, value: T) -> Result<usize> {
        let id = self.nodes.len();
        let node_count = self.nodes.len();
        let parent_node = self.nodes.get_mut(parent).ok_or(Error::InvalidNodeIndex {
            index: parent,
            node_count,
        })?;
        parent_node.children.push(id);

        self.nodes.push(TreeNode {
            value,
            children: Vec::new(),
        });
        Ok(id)
    }

    /// Appends several children under `parent`, returning their indices in order
    pub fn add_children<I>(&mut self, parent: usize, values: I) -> Result<Vec<usize>>
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .map(|value| self.add_child(parent, value))
            .collect()
    }

    /// Returns the node stored at `id`
    pub fn node(&self, id: usize) -> Result<&TreeNode<T>> {
        self.nodes.get(id).ok_or(Error::InvalidNodeIndex {
            index: id,
            node_count: self.nodes.len(),
        })
    }

    /// Returns the value stored at `id`
    pub fn value(&self, id: usize) -> Result<&T> {
        self.node(id).map(|node| &node.value)
    }

    /// Returns the children of `id` in order
    pub fn children(&self, id: usize) -> Result<&[usize]> {
        self.node(id).map(|node| node.children.as_slice())
    }

    /// Builds an arena tree from its nested description, preserving child order
    pub fn from_description(description: &TreeDescription<T>) -> Self
    where
        T: Clone,
    {
        let mut tree = Tree::with_root(description.value.clone());

        // (parent index, pending subtrees)
        let mut pending = vec![(0, &description.children)];
        while let Some((parent, subtrees)) = pending.pop() {
            for subtree in subtrees {
                let id = tree.nodes.len();
                tree.nodes.push(TreeNode {
                    value: subtree.value.clone(),
                    children: Vec::new(),
                });
                if let Some(parent_node) = tree.nodes.get_mut(parent) {
                    parent_node.children.push(id);
                }
                if !subtree.children.is_empty() {
                    pending.push((id, &subtree.children));
                }
            }
        }

        tree
    }

    /// Parses a JSON tree; `null` yields an empty tree
    ///
    /// Input nested beyond `serde_json`'s recursion limit is a parse error.
    pub fn from_json(json: &str) -> Result<Self>
    where
        T: Clone + DeserializeOwned,
    {
        let description: Option<TreeDescription<T>> = serde_json::from_str(json)?;
        Ok(description
            .as_ref()
            .map_or_else(Tree::new, Tree::from_description))
    }

    /// Number of levels below and including the root; 0 for an empty tree
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, level)) = stack.pop() {
            deepest = deepest.max(level);
            if let Some(node) = self.nodes.get(id) {
                stack.extend(node.children.iter().map(|&child| (child, level + 1)));
            }
        }
        deepest
    }

    /// Returns the nested description of the tree, or `None` if it is empty
    pub fn to_description(&self) -> Option<TreeDescription<T>>
    where
        T: Clone,
    {
        let root = self.root?;
        let mut built: Vec<Option<TreeDescription<T>>> = Vec::with_capacity(self.nodes.len());
        built.resize_with(self.nodes.len(), || None);

        // Post-order: a node is assembled once all of its children are built
        let mut stack = vec![(root, false)];
        while let Some((id, children_built)) = stack.pop() {
            let node = self.nodes.get(id)?;
            if children_built {
                let children = node
                    .children
                    .iter()
                    .filter_map(|&child| built.get_mut(child).and_then(Option::take))
                    .collect();
                built[id] = Some(TreeDescription {
                    value: node.value.clone(),
                    children,
                });
            } else {
                stack.push((id, true));
                stack.extend(node.children.iter().map(|&child| (child, false)));
            }
        }

        built.get_mut(root).and_then(Option::take)
    }

    /// Serializes the tree as nested JSON
    ///
    /// Fails with [`Error::TreeTooDeep`] beyond [`MAX_JSON_DEPTH`] levels.
    pub fn to_json(&self) -> Result<String>
    where
        T: Clone + Serialize,
    {
        let depth = self.depth();
        if depth > MAX_JSON_DEPTH {
            return Err(Error::TreeTooDeep {
                depth,
                max_depth: MAX_JSON_DEPTH,
            });
        }
        Ok(serde_json::to_string(&self.to_description())?)
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}
