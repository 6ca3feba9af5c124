use rand::prelude::*;

use crate::graph::grid::Grid;
use crate::graph::traits::MutableGraph;
use crate::graph::tree::Tree;
use crate::graph::weighted::WeightedGraph;
use crate::Result;

/// The five-city road map: A->B(1), A->C(4), B->C(2), B->D(5), C->E(3), D->E(1)
///
/// Cities A..E are vertices 0..4.
pub fn sample_city_graph() -> Result<WeightedGraph<u64>> {
    WeightedGraph::from_edges(
        5,
        [
            (0, 1, 1),
            (0, 2, 4),
            (1, 2, 2),
            (1, 3, 5),
            (2, 4, 3),
            (3, 4, 1),
        ],
    )
}

/// The seven-node tree 1[2[5, 6], 3, 4[7]]
pub fn sample_tree() -> Result<Tree<i64>> {
    let mut tree = Tree::with_root(1);
    let children = tree.add_children(0, [2, 3, 4])?;
    tree.add_children(children[0], [5, 6])?;
    tree.add_child(children[2], 7)?;
    Ok(tree)
}

/// Generates a random directed graph with roughly `edge_factor * vertices` edges
///
/// Weights are drawn from `0..=max_weight`. Self-loops and parallel edges may occur.
pub fn generate_random_graph<R: Rng>(
    rng: &mut R,
    vertices: usize,
    edge_factor: f64,
    max_weight: u64,
) -> Result<WeightedGraph<u64>> {
    let mut graph = WeightedGraph::with_vertices(vertices);
    if vertices == 0 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * vertices as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        let weight = rng.gen_range(0..=max_weight);
        graph.add_edge(u, v, weight)?;
    }

    Ok(graph)
}

/// Generates a random tree with `nodes` nodes valued `1..=nodes`
///
/// Each new node is attached under a uniformly chosen existing node, so child
/// lists keep their attachment order.
pub fn generate_random_tree<R: Rng>(rng: &mut R, nodes: usize) -> Result<Tree<i64>> {
    if nodes == 0 {
        return Ok(Tree::new());
    }

    let mut tree = Tree::with_root(1);
    for value in 2..=nodes as i64 {
        let parent = rng.gen_range(0..tree.len());
        tree.add_child(parent, value)?;
    }
    Ok(tree)
}

/// Generates a degenerate tree where every node has a single child
pub fn generate_chain_tree(nodes: usize) -> Result<Tree<i64>> {
    if nodes == 0 {
        return Ok(Tree::new());
    }

    let mut tree = Tree::with_root(1);
    let mut tail = 0;
    for value in 2..=nodes as i64 {
        tail = tree.add_child(tail, value)?;
    }
    Ok(tree)
}

/// Generates a grid where each cell is blocked with probability `density`
pub fn generate_random_grid<R: Rng>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    density: f64,
) -> Result<Grid> {
    let mut grid = Grid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen_bool(density.clamp(0.0, 1.0)) {
                grid.block((row, col))?;
            }
        }
    }
    Ok(grid)
}
