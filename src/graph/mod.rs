pub mod traits;
pub mod weighted;
pub mod tree;
pub mod grid;
pub mod generators;

pub use traits::{Graph, MutableGraph, Weight};
pub use weighted::{Edge, GraphDescription, WeightedGraph};
pub use tree::{Tree, TreeDescription, TreeNode, MAX_JSON_DEPTH};
pub use grid::{Cell, Grid};
