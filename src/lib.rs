//! Graph Search - classic shortest path and traversal algorithms
//!
//! This library provides:
//! - Dijkstra single-source shortest paths over weighted adjacency lists, using a
//!   binary-heap frontier with lazy deletion of stale entries
//! - Depth-first (pre-order) and breadth-first (level-order) traversal of arena trees
//! - A* search on obstacle grids with a Manhattan heuristic
//!
//! Algorithms return values; printing lives in [`report`].

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod report;

pub use algorithm::{
    astar::AStar, bfs::BreadthFirst, dfs::DepthFirst, dijkstra::Dijkstra, ShortestPathAlgorithm,
    ShortestPathResult, TreeTraversal,
};
/// Re-export main types for convenient use
pub use graph::{grid::Grid, tree::Tree, weighted::WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid node index {index}: expected a value below {node_count}")]
    InvalidNodeIndex { index: usize, node_count: usize },

    #[error("Traversal requested on a tree without a root")]
    NullRoot,

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: usize,
        to: usize,
        weight: String,
    },

    #[error("Distance overflow while relaxing edge {from} -> {to}")]
    DistanceOverflow { from: usize, to: usize },

    #[error("Cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    InvalidCell {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Cell ({row}, {col}) is blocked")]
    BlockedCell { row: usize, col: usize },

    #[error("Tree depth {depth} exceeds the JSON nesting limit of {max_depth} levels")]
    TreeTooDeep { depth: usize, max_depth: usize },

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Failed to parse description: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
