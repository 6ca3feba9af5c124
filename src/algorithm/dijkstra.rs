use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Requires non-negative weights, which [`crate::graph::MutableGraph::add_edge`]
/// enforces for graphs built through it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes only the distance labels from `origin`
    pub fn distances<W, G>(&self, graph: &G, origin: usize) -> Result<Vec<Option<W>>>
    where
        W: Weight,
        G: Graph<W>,
    {
        <Self as ShortestPathAlgorithm<W, G>>::compute_shortest_paths(self, graph, origin)
            .map(|result| result.distances)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        if !graph.has_vertex(source) {
            return Err(Error::InvalidNodeIndex {
                index: source,
                node_count: n,
            });
        }

        // Initialize distances and predecessors
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        let mut frontier = Frontier::seeded(source, W::zero());

        while let Some((u, dist_u)) = frontier.pop() {
            // A shorter path to u was settled after this entry was pushed
            if distances[u].map_or(false, |best| dist_u > best) {
                frontier.mark_stale();
                log::trace!("Discarding stale entry ({:?}, {})", dist_u, u);
                continue;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u
                    .checked_sum(weight)
                    .ok_or(Error::DistanceOverflow { from: u, to: v })?;

                let improves = match distances.get(v) {
                    Some(None) => true,
                    Some(Some(current)) => candidate < *current,
                    None => {
                        return Err(Error::InvalidNodeIndex {
                            index: v,
                            node_count: n,
                        })
                    }
                };

                if improves {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    frontier.push(v, candidate);
                }
            }
        }

        let stats = frontier.stats();
        log::debug!(
            "Dijkstra from {}: {} pushes, {} pops, {} stale entries discarded",
            source,
            stats.pushes,
            stats.pops,
            stats.stale
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
