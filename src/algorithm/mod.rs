pub mod traits;
pub mod dijkstra;
pub mod dfs;
pub mod bfs;
pub mod astar;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult, TreeTraversal};
