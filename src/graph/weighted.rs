use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// A directed edge stored in an adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<W> {
    /// Destination vertex
    pub to: usize,
    /// Non-negative weight
    pub weight: W,
}

/// A weighted directed graph stored as one adjacency list per vertex
///
/// Vertices are the dense indices `0..vertex_count()`. Each list keeps edges in
/// insertion order; self-loops and parallel edges are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph<W> {
    adjacency: Vec<Vec<Edge<W>>>,
}

/// Serializable description of a weighted graph
///
/// ```json
/// { "vertex_count": 3, "edges": [[0, 1, 4], [1, 2, 1]] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription<W> {
    pub vertex_count: usize,
    #[serde(default = "Vec::new")]
    pub edges: Vec<(usize, usize, W)>,
}

impl<W> WeightedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        WeightedGraph {
            adjacency: Vec::new(),
        }
    }

    /// Creates a graph with `vertices` isolated vertices
    pub fn with_vertices(vertices: usize) -> Self {
        WeightedGraph {
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Builds a graph from a vertex count and an edge list, validating every edge
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_vertices(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Builds a graph from its serializable description
    pub fn from_description(description: GraphDescription<W>) -> Result<Self> {
        Self::from_edges(description.vertex_count, description.edges)
    }

    /// Parses a JSON graph description
    pub fn from_json(json: &str) -> Result<Self>
    where
        W: DeserializeOwned,
    {
        let description: GraphDescription<W> = serde_json::from_str(json)?;
        Self::from_description(description)
    }

    /// Returns the description this graph can be rebuilt from
    pub fn to_description(&self) -> GraphDescription<W> {
        let edges = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |edge| (from, edge.to, edge.weight)))
            .collect();

        GraphDescription {
            vertex_count: self.adjacency.len(),
            edges,
        }
    }

    /// Serializes the graph description as JSON
    pub fn to_json(&self) -> Result<String>
    where
        W: Serialize,
    {
        Ok(serde_json::to_string(&self.to_description())?)
    }

    /// Returns the adjacency list of a vertex
    pub fn edges(&self, vertex: usize) -> Result<&[Edge<W>]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(Error::InvalidNodeIndex {
                index: vertex,
                node_count: self.adjacency.len(),
            })
    }

    /// Returns a copy of the graph with each adjacency list reordered by `order`
    ///
    /// Used to check that results do not depend on edge insertion order.
    pub fn with_reordered_edges<F>(&self, mut order: F) -> Self
    where
        F: FnMut(&mut Vec<Edge<W>>),
    {
        let mut adjacency = self.adjacency.clone();
        for edges in adjacency.iter_mut() {
            order(edges);
        }
        WeightedGraph { adjacency }
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::InvalidNodeIndex {
                index: vertex,
                node_count: self.adjacency.len(),
            })
        }
    }
}

impl<W> Default for WeightedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for WeightedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().map(|edge| (edge.to, edge.weight))),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> MutableGraph<W> for WeightedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if weight.is_negative() {
            return Err(Error::NegativeWeight {
                from,
                to,
                weight: format!("{:?}", weight),
            });
        }

        if let Some(edges) = self.adjacency.get_mut(from) {
            edges.push(Edge { to, weight });
        }
        Ok(())
    }
}
