use num_traits::Zero;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

use crate::Result;

/// Edge weight usable by the shortest path algorithms
///
/// Weights must be totally ordered and have a zero. Addition is checked so that
/// integer distances never wrap around silently.
pub trait Weight: Copy + Ord + Zero + Debug {
    /// Adds two weights, returning `None` when the sum is not representable
    fn checked_sum(self, rhs: Self) -> Option<Self>;

    /// Returns true if the weight is below zero
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }
            }
        )*
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Weight for OrderedFloat<f64> {
    fn checked_sum(self, rhs: Self) -> Option<Self> {
        let sum = self + rhs;
        sum.is_finite().then_some(sum)
    }
}

impl Weight for OrderedFloat<f32> {
    fn checked_sum(self, rhs: Self) -> Option<Self> {
        let sum = self + rhs;
        sum.is_finite().then_some(sum)
    }
}

/// Trait representing a weighted directed graph over dense node indices
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the smallest weight among the edges `from -> to`, if any exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Appends a directed edge to the adjacency list of `from`
    ///
    /// Fails with `InvalidNodeIndex` if either endpoint is out of range and with
    /// `NegativeWeight` if the weight is below zero. Parallel edges and self-loops
    /// are kept as given.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
